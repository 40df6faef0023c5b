use yew::prelude::*;
use gloo_timers::callback::Timeout;

const TYPE_MS: u32 = 50;
const DELETE_MS: u32 = 30;
const HOLD_MS: u32 = 2_000;

pub const TELEMETRY_LINES: [&str; 4] = [
    "Establishing neural handshake...",
    "Analyzing circadian rhythm variance...",
    "Optimizing cortisol curve...",
    "System aligned. Awaiting protocol.",
];

/// Type-then-erase cycler over a fixed list of lines.
///
/// `text` is always a prefix of the current line. Each line goes through
/// typing, a hold on the full line, deleting, then an advance to the next
/// line, wrapping at the end of the list. One call to [`Typewriter::step`]
/// applies exactly one transition; [`Typewriter::delay_ms`] is the delay the
/// caller should wait before applying it.
#[derive(Clone, PartialEq)]
pub struct Typewriter {
    lines: Vec<String>,
    line: usize,
    text: String,
    deleting: bool,
}

impl Typewriter {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        assert!(!lines.is_empty(), "typewriter needs at least one line");
        Typewriter {
            lines,
            line: 0,
            text: String::new(),
            deleting: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn deleting(&self) -> bool {
        self.deleting
    }

    /// Delay before the next `step`, keyed off the current phase.
    pub fn delay_ms(&self) -> u32 {
        if self.deleting {
            DELETE_MS
        } else if !self.text.is_empty() && self.text == self.lines[self.line] {
            HOLD_MS
        } else {
            TYPE_MS
        }
    }

    /// Apply one transition: append a character, start deleting after the
    /// hold, remove a character, or advance to the next line.
    pub fn step(&mut self) {
        if self.deleting {
            if self.text.is_empty() {
                self.deleting = false;
                self.line = (self.line + 1) % self.lines.len();
            } else {
                self.text.pop();
            }
        } else if self.text == self.lines[self.line] {
            if self.lines[self.line].is_empty() {
                // An empty line has nothing to type or erase; skip it.
                self.line = (self.line + 1) % self.lines.len();
            } else {
                self.deleting = true;
            }
        } else {
            let target = &self.lines[self.line];
            let next_len = self.text.chars().count() + 1;
            self.text = target.chars().take(next_len).collect();
        }
    }
}

/// Terminal-styled card that types and erases telemetry lines on a loop.
/// A single pending timeout drives every transition; it is cancelled on
/// unmount and replaced after each step, so steps never overlap.
#[function_component(TelemetryTypewriter)]
pub fn telemetry_typewriter() -> Html {
    let machine = use_state(|| Typewriter::new(TELEMETRY_LINES));

    {
        let machine = machine.clone();
        use_effect(move || {
            let delay = machine.delay_ms();
            let timeout = Timeout::new(delay, move || {
                let mut next = (*machine).clone();
                next.step();
                machine.set(next);
            });
            move || drop(timeout)
        });
    }

    html! {
        <div class="typewriter-card">
            <style>
                {TYPEWRITER_CSS}
            </style>
            <div class="typewriter-glow"></div>
            <div class="typewriter-header">
                <span class="typewriter-stream-label">{"Live Stream"}</span>
                <div class="typewriter-rec">
                    <div class="typewriter-rec-dot"></div>
                    <span>{"REC"}</span>
                </div>
            </div>
            <div class="typewriter-body">
                <div class="typewriter-boot">
                    {"> SYSTEM_INIT"}<br/>
                    {"> BIOMETRIC_SYNC_OK"}
                </div>
                <div class="typewriter-line">
                    <span class="typewriter-prompt">{"> "}</span>
                    { machine.text() }
                    <span class="typewriter-caret"></span>
                </div>
            </div>
        </div>
    }
}

const TYPEWRITER_CSS: &str = r#"
    .typewriter-card {
        background: #1A1A1A;
        border-radius: 2rem;
        border: 1px solid rgba(255, 255, 255, 0.1);
        padding: 1.5rem;
        height: 100%;
        display: flex;
        flex-direction: column;
        justify-content: space-between;
        color: #fff;
        font-family: 'JetBrains Mono', monospace;
        font-size: 0.875rem;
        position: relative;
        overflow: hidden;
    }
    .typewriter-glow {
        position: absolute;
        top: 0;
        right: 0;
        width: 8rem;
        height: 8rem;
        background: rgba(204, 88, 51, 0.1);
        filter: blur(50px);
        border-radius: 50%;
        transform: translate(50%, -50%);
        transition: background 1s;
    }
    .typewriter-card:hover .typewriter-glow {
        background: rgba(204, 88, 51, 0.2);
    }
    .typewriter-header {
        display: flex;
        justify-content: space-between;
        align-items: center;
        margin-bottom: 2rem;
        position: relative;
        z-index: 1;
    }
    .typewriter-stream-label {
        font-size: 10px;
        color: rgba(255, 255, 255, 0.4);
        letter-spacing: 0.2em;
        text-transform: uppercase;
    }
    .typewriter-rec {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        font-size: 10px;
        color: #CC5833;
    }
    .typewriter-rec-dot {
        width: 0.375rem;
        height: 0.375rem;
        background: #CC5833;
        border-radius: 50%;
        box-shadow: 0 0 10px #CC5833;
        animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
    }
    .typewriter-body {
        position: relative;
        z-index: 1;
        flex-grow: 1;
        display: flex;
        flex-direction: column;
        justify-content: flex-end;
    }
    .typewriter-boot {
        color: rgba(255, 255, 255, 0.3);
        font-size: 0.75rem;
        margin-bottom: 0.5rem;
        line-height: 1.6;
    }
    .typewriter-line {
        color: #F2F0E9;
        line-height: 1.6;
        min-height: 3rem;
    }
    .typewriter-prompt {
        color: #CC5833;
        margin-right: 0.5rem;
    }
    .typewriter-caret {
        display: inline-block;
        width: 0.5rem;
        height: 1rem;
        background: #CC5833;
        margin-left: 0.25rem;
        vertical-align: middle;
        animation: pulse 1s step-end infinite;
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_always_a_prefix_of_the_current_line() {
        let mut tw = Typewriter::new(["abc", "de"]);
        for _ in 0..200 {
            assert!(tw.lines[tw.line].starts_with(tw.text()));
            tw.step();
        }
    }

    #[test]
    fn deleting_flips_only_after_full_line_and_hold() {
        let mut tw = Typewriter::new(["hi"]);
        assert!(!tw.deleting());
        assert_eq!(tw.delay_ms(), TYPE_MS);
        tw.step(); // "h"
        assert!(!tw.deleting());
        tw.step(); // "hi"
        assert!(!tw.deleting());
        assert_eq!(tw.delay_ms(), HOLD_MS);
        tw.step();
        assert!(tw.deleting());
        assert_eq!(tw.delay_ms(), DELETE_MS);
    }

    #[test]
    fn lines_cycle_in_order_with_no_skips() {
        let mut tw = Typewriter::new(["one", "two", "three"]);
        let mut seen = vec![tw.line()];
        for _ in 0..600 {
            let before = tw.line();
            tw.step();
            if tw.line() != before {
                seen.push(tw.line());
            }
        }
        assert!(seen.len() > 3, "expected at least one full wrap");
        for (count, line) in seen.iter().enumerate() {
            assert_eq!(*line, count % 3);
        }
    }

    #[test]
    fn finishing_a_line_starts_the_next_from_empty() {
        let mut tw = Typewriter::new(["hi", "bye"]);
        tw.step();
        tw.step();
        assert_eq!(tw.text(), "hi");
        tw.step(); // hold elapsed, start deleting
        assert!(tw.deleting());
        tw.step();
        assert_eq!(tw.text(), "h");
        tw.step();
        assert_eq!(tw.text(), "");
        assert!(tw.deleting());
        tw.step(); // advance to the next line
        assert_eq!(tw.line(), 1);
        assert!(!tw.deleting());
        assert_eq!(tw.text(), "");
        tw.step();
        assert_eq!(tw.text(), "b");
    }

    #[test]
    fn empty_lines_are_skipped_without_stalling() {
        let mut tw = Typewriter::new(["a", "", "b"]);
        for _ in 0..50 {
            tw.step();
        }
        // If the empty line stalled the machine, text would never reach "b".
        let mut reached = false;
        for _ in 0..50 {
            tw.step();
            if tw.text() == "b" {
                reached = true;
            }
        }
        assert!(reached);
    }
}
