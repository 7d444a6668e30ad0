use std::io::{self, Write};

use sortvis::prelude::*;
use termcolor::{BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

const CHART_ROWS: u32 = 16;
const CLEAR: &str = "\x1b[2J\x1b[H";

pub struct Screen {
    writer: BufferWriter,
}

impl Screen {
    pub fn new() -> Self {
        Self {
            writer: BufferWriter::stdout(ColorChoice::Auto),
        }
    }

    pub fn draw(
        &mut self,
        board: &Board,
        controller: &RunController,
        settings: &Settings,
        paused: bool,
    ) -> io::Result<()> {
        let pitch = controller.stage().pitch();
        let main = board.bars(Lane::Main, pitch);
        let left = board.bars(Lane::Left, pitch);
        let right = board.bars(Lane::Right, pitch);
        let tallest = main.iter().map(|bar| bar.value).max().unwrap_or(1);

        let mut buffer = self.writer.buffer();
        write!(buffer, "{}", CLEAR)?;

        for row in (1..=CHART_ROWS).rev() {
            for bar in &main {
                if bar_height(bar.value, tallest) >= row {
                    paint(&mut buffer, bar.state, "██")?;
                } else {
                    write!(buffer, "  ")?;
                }
                write!(buffer, " ")?;
            }
            writeln!(buffer)?;
        }

        for bar in &main {
            write!(buffer, "{:<3}", marker_glyph(bar.marker))?;
        }
        writeln!(buffer)?;

        let legend: Vec<String> = main
            .iter()
            .filter_map(|bar| bar.marker)
            .map(|m| format!("{} = {}", marker_glyph(Some(m)), m))
            .collect();
        writeln!(buffer, "{}", legend.join("  "))?;

        if !left.is_empty() || !right.is_empty() {
            draw_lane(&mut buffer, "LEFT ", &left)?;
            draw_lane(&mut buffer, "RIGHT", &right)?;
        }

        let stats = controller.stats();
        let status = match (paused, controller.status()) {
            (true, _) => "paused",
            (false, RunStatus::Running) => "running",
            (false, RunStatus::Finished) => "done",
        };
        writeln!(
            buffer,
            "\n{} | run {} | {}/{} finished | speed {} | {} comparisons, \
             {} swaps, {} writes | {}",
            controller.driver().display_name,
            controller.generation(),
            board.finished(),
            controller.count(),
            settings.speed,
            stats.comparisons,
            stats.swaps,
            stats.writes,
            status
        )?;
        writeln!(
            buffer,
            "commands: r(eset) p(ause) q(uit) n <count> s <speed> a <name>"
        )?;

        self.writer.print(&buffer)
    }
}

fn draw_lane(
    buffer: &mut termcolor::Buffer,
    label: &str,
    bars: &[BarView],
) -> io::Result<()> {
    write!(buffer, "{} ", label)?;
    for bar in bars {
        paint(buffer, bar.state, &format!("{:>3}", bar.value))?;
    }
    writeln!(buffer)
}

fn paint(
    buffer: &mut termcolor::Buffer,
    state: VisualState,
    text: &str,
) -> io::Result<()> {
    // Neutral bars use the terminal's own foreground
    if state == VisualState::Neutral {
        return write!(buffer, "{}", text);
    }
    let (r, g, b) = state.rgb();
    buffer.set_color(ColorSpec::new().set_fg(Some(Color::Rgb(r, g, b))))?;
    write!(buffer, "{}", text)?;
    buffer.reset()
}

fn marker_glyph(marker: Option<Marker>) -> &'static str {
    match marker {
        None => "",
        Some(Marker::Minimum) => "m",
        Some(Marker::Pivot) => "p",
        Some(Marker::Left) => "L",
        Some(Marker::Right) => "R",
        Some(Marker::LeftRight) => "LR",
    }
}

/// Rows filled by a bar of `value` when `tallest` spans the whole chart
fn bar_height(value: u32, tallest: u32) -> u32 {
    let rows = (u64::from(value) * u64::from(CHART_ROWS))
        .div_ceil(u64::from(tallest.max(1)));
    u32::try_from(rows).unwrap_or(u32::MAX)
}

pub fn print_list(registry: &DriverRegistry) {
    for category in registry.categories() {
        println!("{}", category.title);
        for entry in category.drivers.iter().filter_map(|n| registry.get(n)) {
            let config = entry.config;
            let stable = if config.stable { "stable" } else { "unstable" };
            println!(
                "  {:<10} {} ({})\n             {}",
                config.name, config.display_name, stable, config.description
            );
        }
    }
}
