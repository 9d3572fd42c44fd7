//! # Events Module
//!
//! Event-driven progress reporting for the scanner.
//!
//! ## Design
//! The core library emits events through channels, allowing any frontend
//! (CLI, GUI) to subscribe and display progress without the engine knowing
//! who is listening.
//!
//! ## Example
//! ```rust,ignore
//! let (sender, receiver) = EventChannel::new();
//!
//! std::thread::spawn(move || {
//!     for event in receiver.iter() {
//!         if let Event::Scan(ScanEvent::Progress(p)) = event {
//!             println!("{} folders scanned", p.folders_scanned);
//!         }
//!     }
//! });
//!
//! scanner.scan_with_events(&root, &sender)?;
//! ```

mod channel;
mod types;

pub use channel::{null_sender, EventChannel, EventReceiver, EventSender};
pub use types::*;
