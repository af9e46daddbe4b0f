//! Terminal event pump: ticks, keys, resizes over an mpsc channel.

use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};

/// Events delivered to the application loop.
#[derive(Debug)]
pub enum Event {
    /// Periodic tick; drives debounce deadlines.
    Tick,
    Key(KeyEvent),
    Resize(u16, u16),
}

/// Polls crossterm on a background thread and forwards events.
pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or(Duration::ZERO);
                let ready = match event::poll(timeout) {
                    Ok(ready) => ready,
                    Err(_) => break,
                };
                if ready {
                    let forwarded = match event::read() {
                        // Release/repeat events would double keystrokes on Windows terminals.
                        Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                            tx.send(Event::Key(key))
                        }
                        Ok(CrosstermEvent::Resize(w, h)) => tx.send(Event::Resize(w, h)),
                        Ok(_) => Ok(()),
                        Err(_) => break,
                    };
                    if forwarded.is_err() {
                        break;
                    }
                }
                if last_tick.elapsed() >= tick_rate {
                    if tx.send(Event::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });
        Self { rx }
    }

    /// Blocks until the next event. Errors mean the pump thread is gone.
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.rx.recv()
    }
}
