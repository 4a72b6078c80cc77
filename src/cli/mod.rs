use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveTime;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::parsers::{palette, read_events, week};
use crate::render::{FontFace, PageSetup, PageTransform, PdfSurface, RenderOptions};
use crate::tui;
use crate::types::{hours_of, parse_time, Schedule};

/// Environment variable holding the log filter
const LOG_ENV: &str = "WEEKGRID_LOG";

/// Typeset a weekly schedule as a one-page PDF
#[derive(Parser, Debug)]
#[command(name = "weekgrid")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Fill event boxes with a cycle of colors instead of grey
    #[arg(short = 'C', long)]
    color: bool,

    /// Font for all text: a standard PDF font name or a TrueType file
    #[arg(short = 'F', long, value_name = "NAME|TTF_FILE", default_value = "Helvetica")]
    font: String,

    /// Base font size in points
    #[arg(short = 'f', long, default_value_t = 10.0, value_parser = positive)]
    font_size: f64,

    /// Start the week on Monday instead of Sunday
    #[arg(short = 'M', long)]
    start_monday: bool,

    /// Only show Monday through Friday
    #[arg(long)]
    no_weekends: bool,

    /// Portrait page instead of landscape
    #[arg(short, long)]
    portrait: bool,

    /// First time shown on the grid (e.g. 8:00)
    #[arg(short = 'S', long, value_parser = clock)]
    start_time: Option<NaiveTime>,

    /// Last time shown on the grid (e.g. 17:30)
    #[arg(short = 'E', long, value_parser = clock)]
    end_time: Option<NaiveTime>,

    /// Scale the grid about the page center
    #[arg(short, long, value_parser = positive)]
    scale: Option<f64>,

    /// Hide the hour labels
    #[arg(short = 'T', long)]
    no_times: bool,

    /// Show the schedule in the terminal instead of writing a PDF
    #[arg(long)]
    preview: bool,

    /// Log render decisions to stderr
    #[arg(short, long)]
    verbose: bool,

    /// YAML event file, or - for stdin
    #[arg(default_value = "-")]
    infile: String,

    /// PDF to write, or - for stdout [default: INFILE with .pdf extension]
    outfile: Option<String>,
}

fn clock(s: &str) -> Result<NaiveTime, String> {
    parse_time(s).map_err(|e| e.to_string())
}

fn positive(s: &str) -> Result<f64, String> {
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        Ok(_) => Err(format!("{} is not a positive number", s)),
        Err(e) => Err(e.to_string()),
    }
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        self.init_logging();

        let input = self.read_input()?;
        let schedule = self.build_schedule(&input)?;
        let options = self.render_options();

        if self.preview {
            return tui::run(&schedule, options);
        }

        let pdf = self.render_pdf(&schedule, &options)?;
        match self.output_path() {
            None => {
                pdf.save(io::stdout().lock())?;
                info!("wrote pdf to stdout");
            }
            Some(path) => {
                let file = File::create(&path)
                    .with_context(|| format!("cannot create {}", path.display()))?;
                pdf.save(file)?;
                info!(path = %path.display(), "wrote pdf");
            }
        }
        Ok(())
    }

    fn init_logging(&self) {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
            EnvFilter::new(if self.verbose { "weekgrid=debug" } else { "warn" })
        });
        // A subscriber may already be installed when embedded
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(false)
            .try_init();
    }

    fn read_input(&self) -> anyhow::Result<String> {
        let mut input = String::new();
        if self.infile == "-" {
            io::stdin()
                .read_to_string(&mut input)
                .context("cannot read stdin")?;
        } else {
            input = std::fs::read_to_string(&self.infile)
                .with_context(|| format!("cannot read {}", self.infile))?;
        }
        Ok(input)
    }

    fn build_schedule(&self, input: &str) -> anyhow::Result<Schedule> {
        let events = read_events(input, palette(self.color))
            .with_context(|| format!("reading {}", self.input_name()))?;
        let mut schedule = Schedule::new(week(self.start_monday, !self.no_weekends).iter().copied());
        schedule.extend(events);
        debug!(
            days = schedule.number_of_days(),
            events = schedule.all_events().len(),
            "built schedule"
        );
        Ok(schedule)
    }

    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            show_times: !self.no_times,
            min_time: self.start_time.map(hours_of),
            max_time: self.end_time.map(hours_of),
        }
    }

    fn font_face(&self) -> anyhow::Result<FontFace> {
        let face = FontFace::resolve(&self.font)
            .with_context(|| format!("{} is neither a standard font nor a TrueType file", self.font))?;
        debug!(font = face.name(), "resolved font");
        Ok(face)
    }

    fn render_pdf(&self, schedule: &Schedule, options: &RenderOptions) -> anyhow::Result<PdfSurface> {
        let setup = PageSetup::letter(self.portrait);
        let transform = PageTransform::scaled(&setup, self.scale);
        let face = self.font_face()?;
        let mut pdf = PdfSurface::new("Schedule", &setup, face, self.font_size, transform)?;
        schedule.render(&mut pdf, setup.content_area(), self.font_size, options)?;
        Ok(pdf)
    }

    /// Destination file, or `None` for stdout
    fn output_path(&self) -> Option<PathBuf> {
        match self.outfile.as_deref() {
            Some("-") => None,
            Some(path) => Some(PathBuf::from(path)),
            None if self.infile == "-" => None,
            None => Some(Path::new(&self.infile).with_extension("pdf")),
        }
    }

    fn input_name(&self) -> &str {
        if self.infile == "-" {
            "<stdin>"
        } else {
            &self.infile
        }
    }
}
