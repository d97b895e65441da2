#![cfg_attr(not(feature = "colored"), allow(unused_variables))]

#[cfg(feature = "colored")]
use colored::{Color, Colorize};
use core::fmt::{self, Write};

#[derive(Copy, Clone, Debug)]
pub(crate) struct Format {
    #[cfg(feature = "colored")]
    pub colored: bool,
    pub detailed: bool,
    pub head: bool,
}

impl Default for Format {
    fn default() -> Self {
        Format {
            #[cfg(feature = "colored")]
            colored: true,
            detailed: true,
            head: true,
        }
    }
}

impl Format {
    pub fn message(self, f: &mut fmt::Formatter, msg: &impl ToString) -> fmt::Result {
        let msg = msg.to_string();
        let lines = msg.lines();
        if self.detailed {
            for line in lines {
                self.edge(f)?;
                writeln!(f, " {}", line.trim())?;
            }
        } else if let Some(line) = lines.map(str::trim).find(|s| !s.is_empty()) {
            f.write_char(' ')?;
            f.write_str(line)?;
            writeln!(f)?;
        } else {
            writeln!(f)?;
        }
        Ok(())
    }

    pub fn mark(self, f: &mut fmt::Formatter, redo: bool) -> fmt::Result {
        #[cfg(feature = "colored")]
        if self.colored {
            return write!(f, "{} ", "*".color(color_of(redo)));
        }
        f.write_str("* ")
    }

    pub fn edge(self, f: &mut fmt::Formatter) -> fmt::Result {
        #[cfg(feature = "colored")]
        if self.colored {
            return write!(f, "{}", "|".color(Color::Cyan));
        }
        f.write_char('|')
    }

    pub fn position(self, f: &mut fmt::Formatter, position: usize) -> fmt::Result {
        #[cfg(feature = "colored")]
        if self.colored {
            return write!(f, "{}", position.to_string().yellow().bold());
        }
        write!(f, "{position}")
    }

    pub fn head(self, f: &mut fmt::Formatter, at_head: bool) -> fmt::Result {
        if !(self.head && at_head) {
            return Ok(());
        }
        #[cfg(feature = "colored")]
        if self.colored {
            return write!(f, " {}{}{}", "[".yellow(), "HEAD".cyan().bold(), "]".yellow());
        }
        f.write_str(" [HEAD]")
    }

    #[cfg(feature = "chrono")]
    pub fn elapsed(self, f: &mut fmt::Formatter, elapsed: chrono::Duration) -> fmt::Result {
        let elapsed = elapsed.to_std().unwrap_or_default();
        #[cfg(feature = "colored")]
        if self.colored {
            return write!(f, " {}", format!("{elapsed:.1?}").yellow());
        }
        write!(f, " {elapsed:.1?}")
    }
}

#[cfg(feature = "colored")]
fn color_of(redo: bool) -> Color {
    if redo {
        Color::Red
    } else {
        Color::Cyan
    }
}
