use std::io::{self, Write};

use crate::model::WeatherReading;

/// A single render capability: anything that can consume one reading.
///
/// Handlers are registered with a [`crate::WeatherStation`] and invoked in
/// registration order on every broadcast. They hold no state beyond their
/// output sink.
pub trait DisplayHandler: Send {
    /// Short label used in logs when a render fails.
    fn name(&self) -> &'static str;

    /// Render one reading to this display's sink.
    fn render(&mut self, reading: &WeatherReading) -> io::Result<()>;
}

/// Labeled plain-text lines, one field per line.
pub struct ConsoleDisplay<W = io::Stdout> {
    out: W,
}

impl ConsoleDisplay {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for ConsoleDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ConsoleDisplay<W> {
    /// Render into an arbitrary sink instead of stdout.
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write + Send> DisplayHandler for ConsoleDisplay<W> {
    fn name(&self) -> &'static str {
        "console"
    }

    fn render(&mut self, reading: &WeatherReading) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "[Console Display]")?;
        writeln!(self.out, "City: {}", reading.city)?;
        writeln!(self.out, "Temp: {}°C", reading.temperature_c)?;
        writeln!(self.out, "Wind: {} m/s", reading.wind_speed_mps)?;
        Ok(())
    }
}

/// Same fields as [`ConsoleDisplay`], decorated with emoji glyphs.
pub struct EmojiDisplay<W = io::Stdout> {
    out: W,
}

impl EmojiDisplay {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for EmojiDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> EmojiDisplay<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write + Send> DisplayHandler for EmojiDisplay<W> {
    fn name(&self) -> &'static str {
        "emoji"
    }

    fn render(&mut self, reading: &WeatherReading) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "🌤️  [Emoji Display]")?;
        writeln!(self.out, "🌍 {}", reading.city)?;
        writeln!(self.out, "🌡️ {}°C", reading.temperature_c)?;
        writeln!(self.out, "💨 {} m/s", reading.wind_speed_mps)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn london() -> WeatherReading {
        WeatherReading {
            city: "London".to_string(),
            temperature_c: 12.5,
            wind_speed_mps: 4.2,
        }
    }

    #[test]
    fn console_display_formats_labeled_lines() {
        let mut buf = Vec::new();
        ConsoleDisplay::with_writer(&mut buf).render(&london()).unwrap();

        let out = String::from_utf8(buf).unwrap();
        assert_eq!(out, "\n[Console Display]\nCity: London\nTemp: 12.5°C\nWind: 4.2 m/s\n");
    }

    #[test]
    fn emoji_display_decorates_the_same_fields() {
        let mut buf = Vec::new();
        EmojiDisplay::with_writer(&mut buf).render(&london()).unwrap();

        let out = String::from_utf8(buf).unwrap();
        assert_eq!(out, "\n🌤️  [Emoji Display]\n🌍 London\n🌡️ 12.5°C\n💨 4.2 m/s\n");
    }

    #[test]
    fn whole_numbers_render_without_trailing_zeros() {
        let mut buf = Vec::new();
        let reading = WeatherReading {
            city: "Oslo".to_string(),
            temperature_c: -2.0,
            wind_speed_mps: 7.0,
        };
        ConsoleDisplay::with_writer(&mut buf).render(&reading).unwrap();

        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("Temp: -2°C"));
        assert!(out.contains("Wind: 7 m/s"));
    }
}
