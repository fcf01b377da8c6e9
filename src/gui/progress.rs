// src/gui/progress.rs
use std::sync::{ Arc, Mutex };
use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn log(&mut self, msg: &str) {
        self.set_status(msg);
    }
    fn fetched(&mut self, bytes: usize) {
        self.set_status(format!("Parsing {} KB…", bytes.div_ceil(1024)));
    }
    fn finish(&mut self, records: usize, warnings: usize) {
        if warnings == 0 {
            self.set_status(format!("Loaded {records} robots"));
        } else {
            self.set_status(format!("Loaded {records} robots ({warnings} malformed rows)"));
        }
    }
}
