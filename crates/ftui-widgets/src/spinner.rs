//! A ticking progress indicator for a background task.
//!
//! Unlike the rest of the kit, a spinner isn't Elm-loop driven: there's no
//! input to read, so [`Spinner::run`] hides the cursor, spawns the caller's
//! work on a thread, and ticks frames on the main thread via the same
//! [`LiveRegion`] the runtime uses, polling the worker with
//! [`std::sync::mpsc::Receiver::try_recv`] until it finishes.

use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use ftui_core::terminal::{self, size};
use ftui_render::LiveRegion;
use ftui_style::{Color, Style};

/// A named animation preset: each a list of frame glyphs plus the interval
/// between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerStyle {
    Line,
    Dots,
    MiniDot,
    Jump,
    Pulse,
    Points,
    Globe,
    Moon,
    Monkey,
    Meter,
    Hamburger,
    BouncingBar,
    BouncingBall,
    Aesthetic,
    Point,
}

impl SpinnerStyle {
    #[must_use]
    pub const fn frames(self) -> &'static [&'static str] {
        match self {
            Self::Line => &["-", "\\", "|", "/"],
            Self::Dots => &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"],
            Self::MiniDot => &["⠁", "⠂", "⠄", "⡀", "⢀", "⠠", "⠐", "⠈"],
            Self::Jump => &["⢄", "⢂", "⢁", "⡁", "⡈", "⡐", "⡠"],
            Self::Pulse => &["█", "▓", "▒", "░"],
            Self::Points => &["∙∙∙", "●∙∙", "∙●∙", "∙∙●"],
            Self::Globe => &["🌍", "🌎", "🌏"],
            Self::Moon => &["🌑", "🌒", "🌓", "🌔", "🌕", "🌖", "🌗", "🌘"],
            Self::Monkey => &["🙈", "🙉", "🙊"],
            Self::Meter => &["▱▱▱", "▰▱▱", "▰▰▱", "▰▰▰"],
            Self::Hamburger => &["☱", "☲", "☴", "☲"],
            Self::BouncingBar => &["[    ]", "[=   ]", "[==  ]", "[=== ]", "[ ===]", "[  ==]", "[   =]"],
            Self::BouncingBall => &["( ●    )", "(  ●   )", "(   ●  )", "(    ● )", "(     ●)", "(    ● )", "(   ●  )", "(  ●   )", "( ●    )", "(●     )"],
            Self::Aesthetic => &["▰▱▱▱▱▱▱", "▰▰▱▱▱▱▱", "▰▰▰▱▱▱▱", "▰▰▰▰▱▱▱", "▰▰▰▰▰▱▱", "▰▰▰▰▰▰▱", "▰▰▰▰▰▰▰"],
            Self::Point => &["∙∙∙", "●∙∙", "∙●∙", "∙∙●", "∙∙∙"],
        }
    }

    #[must_use]
    pub const fn interval(self) -> Duration {
        Duration::from_millis(80)
    }
}

/// How a spinner's frames are colored.
///
/// Grounded in the teacher pack's `r3bl-open-core` spinner (`SpinnerColor`
/// in `spinner_style.rs`, backed by its `ColorWheel`/`truecolor_gradient`
/// stops-and-steps model) — reduced to a direct per-frame linear
/// interpolation across a list of RGB stops rather than a standalone
/// precomputed wheel type, since a spinner here only ever needs "the
/// color for frame N."
#[derive(Debug, Clone, PartialEq)]
enum SpinnerPaint {
    None,
    Solid(Color),
    /// Two or more RGB stops; colors are interpolated across the full
    /// frame cycle and repeat each time the animation loops.
    Gradient(Vec<Color>),
}

/// Builder that runs a titled spinner around a unit of work.
#[derive(Debug, Clone)]
pub struct Spinner {
    title: String,
    style: SpinnerStyle,
    color: SpinnerPaint,
}

impl Spinner {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            style: SpinnerStyle::Dots,
            color: SpinnerPaint::None,
        }
    }

    #[must_use]
    pub const fn style(mut self, style: SpinnerStyle) -> Self {
        self.style = style;
        self
    }

    /// Paint every frame the same solid color.
    #[must_use]
    pub const fn color(mut self, color: Color) -> Self {
        self.color = SpinnerPaint::Solid(color);
        self
    }

    /// Paint frames by interpolating across `stops` (at least two RGB
    /// colors) over the course of one animation cycle. Fewer than two
    /// stops falls back to `None`/`Solid` rather than erroring — a
    /// misconfigured gradient clamps to a safe default like every other
    /// widget option.
    #[must_use]
    pub fn gradient(mut self, stops: Vec<Color>) -> Self {
        self.color = match stops.len() {
            0 => SpinnerPaint::None,
            1 => SpinnerPaint::Solid(stops[0]),
            _ => SpinnerPaint::Gradient(stops),
        };
        self
    }

    /// Runs `f` on a worker thread, ticking frames until it completes, then
    /// returns `f`'s result. Raw mode is not touched — spinners don't read
    /// input — only the cursor is hidden for the duration.
    pub fn run<T: Send + 'static>(self, f: impl FnOnce() -> T + Send + 'static) -> T {
        let (tx, rx) = mpsc::channel();
        let handle = thread::spawn(move || {
            let result = f();
            let _ = tx.send(result);
        });

        let mut stdout = io::stdout();
        let _ = terminal::cursor::hide(&mut stdout);
        let mut region = LiveRegion::new();
        let frames = self.style.frames();
        let mut i = 0usize;

        let result = loop {
            match rx.try_recv() {
                Ok(result) => break result,
                Err(mpsc::TryRecvError::Empty) => {}
                Err(mpsc::TryRecvError::Disconnected) => {
                    let _ = handle.join();
                    unreachable!("worker disconnected without sending a result");
                }
            }
            let frame = frames[i % frames.len()];
            let glyph = match &self.color {
                SpinnerPaint::None => frame.to_string(),
                SpinnerPaint::Solid(c) => Style::new().fg(*c).paint(frame),
                SpinnerPaint::Gradient(stops) => {
                    let c = gradient_color(stops, i % frames.len(), frames.len());
                    Style::new().fg(c).paint(frame)
                }
            };
            let (cols, _rows) = size();
            let _ = region.render(&mut stdout, &format!("{glyph} {}", self.title), cols);
            i += 1;
            thread::sleep(self.style.interval());
        };

        let _ = region.clear(&mut stdout);
        let _ = terminal::cursor::show(&mut stdout);
        let _ = handle.join();
        result
    }
}

/// The color for `frame_idx` of `frame_count`, linearly interpolated
/// across `stops` (treated as non-RGB-safe: a non-`Rgb` stop is taken as
/// white rather than rejected, since this is cosmetic, not user input to
/// validate).
fn gradient_color(stops: &[Color], frame_idx: usize, frame_count: usize) -> Color {
    debug_assert!(stops.len() >= 2);
    let segments = stops.len() - 1;
    let t = frame_idx as f64 / frame_count.max(1) as f64 * segments as f64;
    let seg = (t.floor() as usize).min(segments - 1);
    let local_t = t - seg as f64;
    lerp_rgb(stops[seg], stops[seg + 1], local_t)
}

fn lerp_rgb(a: Color, b: Color, t: f64) -> Color {
    let (ar, ag, ab) = as_rgb(a);
    let (br, bg, bb) = as_rgb(b);
    Color::Rgb(
        lerp_u8(ar, br, t),
        lerp_u8(ag, bg, t),
        lerp_u8(ab, bb, t),
    )
}

fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
    (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8
}

fn as_rgb(c: Color) -> (u8, u8, u8) {
    match c {
        Color::Rgb(r, g, b) => (r, g, b),
        _ => (255, 255, 255),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_style_has_at_least_one_frame() {
        for style in [
            SpinnerStyle::Line,
            SpinnerStyle::Dots,
            SpinnerStyle::MiniDot,
            SpinnerStyle::Jump,
            SpinnerStyle::Pulse,
            SpinnerStyle::Points,
            SpinnerStyle::Globe,
            SpinnerStyle::Moon,
            SpinnerStyle::Monkey,
            SpinnerStyle::Meter,
            SpinnerStyle::Hamburger,
            SpinnerStyle::BouncingBar,
            SpinnerStyle::BouncingBall,
            SpinnerStyle::Aesthetic,
            SpinnerStyle::Point,
        ] {
            assert!(!style.frames().is_empty());
        }
    }

    #[test]
    fn run_returns_the_worker_result() {
        let spinner = Spinner::new("working").style(SpinnerStyle::Line);
        let result = spinner.run(|| 2 + 2);
        assert_eq!(result, 4);
    }

    #[test]
    fn gradient_interpolates_between_stops() {
        let stops = vec![Color::Rgb(0, 0, 0), Color::Rgb(100, 0, 0)];
        assert_eq!(gradient_color(&stops, 0, 4), Color::Rgb(0, 0, 0));
        assert_eq!(gradient_color(&stops, 2, 4), Color::Rgb(50, 0, 0));
    }

    #[test]
    fn gradient_with_multiple_stops_walks_every_segment() {
        let stops = vec![
            Color::Rgb(0, 0, 0),
            Color::Rgb(100, 0, 0),
            Color::Rgb(100, 100, 0),
        ];
        assert_eq!(gradient_color(&stops, 0, 4), Color::Rgb(0, 0, 0));
        assert_eq!(gradient_color(&stops, 2, 4), Color::Rgb(100, 0, 0));
    }

    #[test]
    fn gradient_builder_falls_back_for_fewer_than_two_stops() {
        let spinner = Spinner::new("working").gradient(vec![]);
        assert_eq!(spinner.color, SpinnerPaint::None);

        let spinner = Spinner::new("working").gradient(vec![Color::RED]);
        assert_eq!(spinner.color, SpinnerPaint::Solid(Color::RED));
    }
}
