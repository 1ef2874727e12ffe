use std::cell::RefCell;
use std::io::Write;

use tracing::warn;

use jugaad_chat::models::{Message, Role};
use jugaad_chat::{typing, CouponCard, InputField, Transcript, TranscriptView};

const TYPING_LINE: &str = "JUGAAD is typing…";
/// Carriage return plus ANSI "erase entire line".
const ERASE_LINE: &str = "\r\x1b[2K";

pub fn format_message(message: &Message, card: Option<&CouponCard>) -> String {
    let body = match card {
        Some(card) => card.to_plain_text(),
        None => message.raw_text.clone(),
    };
    let speaker = match message.role {
        Role::User => "you",
        Role::Bot => "JUGAAD",
    };
    let indent = " ".repeat(speaker.chars().count() + 3);
    let mut lines = body.split('\n');
    let first = lines.next().unwrap_or_default();
    let mut out = format!("{speaker} › {first}");
    for line in lines {
        out.push('\n');
        out.push_str(&indent);
        out.push_str(line);
    }
    out
}

/// Prints each appended entry as it arrives. The typing placeholder is a
/// single unterminated line that is erased again when hidden.
pub struct TerminalTranscript<W: Write> {
    transcript: Transcript,
    out: W,
}

impl<W: Write> TerminalTranscript<W> {
    pub fn new(out: W) -> Self {
        Self { transcript: Transcript::new(), out }
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = self.out.write_all(text.as_bytes()).and_then(|()| self.out.flush()) {
            warn!("Failed to write to terminal: {e}");
        }
    }

    fn print_last(&mut self) {
        let line = self
            .transcript
            .last()
            .and_then(|entry| entry.message().map(|m| format_message(m, entry.card())));
        if let Some(line) = line {
            self.emit(&format!("{line}\n"));
        }
    }
}

impl<W: Write> TranscriptView for TerminalTranscript<W> {
    fn append_user(&mut self, message: Message) {
        self.transcript.append_user(message);
        self.print_last();
    }

    fn append_bot(&mut self, message: Message, card: Option<CouponCard>) {
        self.transcript.append_bot(message, card);
        self.print_last();
    }

    fn show_typing(&mut self) {
        if typing::show(&mut self.transcript) {
            self.emit(TYPING_LINE);
        }
    }

    fn hide_typing(&mut self) {
        if typing::remove(&mut self.transcript) {
            self.emit(ERASE_LINE);
        }
    }
}

/// The pending line of input.
#[derive(Debug, Default)]
pub struct LineField(RefCell<String>);

impl InputField for LineField {
    fn value(&self) -> String {
        self.0.borrow().clone()
    }

    fn set_value(&self, value: &str) {
        *self.0.borrow_mut() = value.to_string();
    }
}
