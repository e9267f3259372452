//! Interactive session: one line per command, one widget per command group.
//!
//! Logs live as long as the session. Every line is parsed with clap, so
//! `help`, `feed help`, `sleep --help` ... work as usual. A failed command
//! is reported and the session goes on with its state untouched.

use crate::config::Config;
use crate::core::diaper::DiaperTracker;
use crate::core::feeding::FeedingTracker;
use crate::core::sleep::SleepTracker;
use crate::core::timer::TimerStatus;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, ExportLogic, ExportRecord, PageGeometry};
use crate::models::{Channel, DiaperKind};
use crate::ui::messages::{header, info, report, success, warning};
use crate::utils::colors::{paint_counter, paint_status};
use crate::utils::formatting::{bold, or_dash, oz};
use crate::utils::table::{Column, Table};
use crate::utils::secs2readable;
use crate::utils::time::{format_12h, format_mmss};
use chrono::Local;
use clap::{Parser, Subcommand};
use regex::Regex;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "babylog", no_binary_name = true, disable_version_flag = true)]
struct SessionLine {
    #[command(subcommand)]
    command: SessionCommand,
}

#[derive(Subcommand, Debug)]
enum SessionCommand {
    /// Breastfeeding timer, bottles and feeding log
    #[command(subcommand)]
    Feed(FeedCommand),

    /// Sleep sessions
    #[command(subcommand)]
    Sleep(SleepCommand),

    /// Diaper changes
    #[command(subcommand)]
    Diaper(DiaperCommand),

    /// End the session (logs are discarded)
    #[command(alias = "exit")]
    Quit,
}

#[derive(Subcommand, Debug)]
enum FeedCommand {
    /// Start (or switch to) the left or right timer
    Start { channel: String },
    /// Pause the running timer
    Pause,
    /// Zero both timers
    Reset,
    /// Show timers and the pending form
    Status,
    /// Set manual minutes on top of the timed ones
    Manual {
        #[arg(long, allow_negative_numbers = true)]
        left: Option<i64>,
        #[arg(long, allow_negative_numbers = true)]
        right: Option<i64>,
    },
    /// Formula amount in oz
    Formula {
        #[arg(allow_negative_numbers = true)]
        oz: f64,
    },
    /// Pumped milk amount in oz
    Pumped {
        #[arg(allow_negative_numbers = true)]
        oz: f64,
    },
    /// Notes for this feeding (empty clears them)
    Notes {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Log the feeding session and reset the form
    Log,
    /// Show the feeding log
    List {
        #[arg(long)]
        json: bool,
    },
    /// Export the feeding log (feeding_logs.pdf by default)
    Export {
        #[arg(long, value_enum, default_value = "pdf")]
        format: ExportFormat,
    },
}

#[derive(Subcommand, Debug)]
enum SleepCommand {
    /// Start time (HH:MM)
    Start { time: String },
    /// End time (HH:MM), may be after midnight
    End { time: String },
    /// Notes for this sleep (empty clears them)
    Notes {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Log the sleep session and reset the form
    Log,
    /// Show the sleep log
    List {
        #[arg(long)]
        json: bool,
    },
    /// Export the sleep log (sleep_logs.pdf by default)
    Export {
        #[arg(long, value_enum, default_value = "pdf")]
        format: ExportFormat,
    },
}

#[derive(Subcommand, Debug)]
enum DiaperCommand {
    /// Diaper type: poop, pee or both
    Type { kind: String },
    /// Attach a photo (recompressed to JPEG)
    Image { path: String },
    /// Notes for this change (empty clears them)
    Notes {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Log the diaper change and reset the form
    Log,
    /// Show the diaper log
    List {
        #[arg(long)]
        json: bool,
    },
    /// Export the diaper log (diaper_change_logs.pdf by default)
    Export {
        #[arg(long, value_enum, default_value = "pdf")]
        format: ExportFormat,
    },
}

/// What the loop does after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Split a line into words; double or single quotes group words.
pub fn tokenize(line: &str) -> AppResult<Vec<String>> {
    let re = Regex::new(r#""([^"]*)"|'([^']*)'|(\S+)"#)
        .map_err(|e| AppError::Command(e.to_string()))?;

    Ok(re
        .captures_iter(line)
        .filter_map(|c| c.get(1).or_else(|| c.get(2)).or_else(|| c.get(3)))
        .map(|m| m.as_str().to_string())
        .collect())
}

pub struct Session {
    out_dir: PathBuf,
    page: PageGeometry,
    feeding: FeedingTracker,
    sleep: SleepTracker,
    diaper: DiaperTracker,
}

impl Session {
    pub fn new(cfg: &Config) -> Self {
        Self {
            out_dir: cfg.output_dir(),
            page: cfg.page.clone(),
            feeding: FeedingTracker::new(cfg.tick()),
            sleep: SleepTracker::new(cfg.sleep_policy),
            diaper: DiaperTracker::new(cfg.image_max_width, cfg.image_quality),
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn feeding(&self) -> &FeedingTracker {
        &self.feeding
    }

    pub fn sleep(&self) -> &SleepTracker {
        &self.sleep
    }

    pub fn diaper(&self) -> &DiaperTracker {
        &self.diaper
    }

    /// Read commands from `input` until `quit` or end of input.
    pub fn run<R: BufRead>(&mut self, input: R) -> AppResult<()> {
        let interactive = io::stdin().is_terminal();
        if interactive {
            header("babylog session");
            info("Type `help` for the list of commands, `quit` to leave.");
        }

        let mut lines = input.lines();
        loop {
            if interactive {
                print!("babylog> ");
                io::stdout().flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;

            match self.execute(&line, Instant::now()) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => report(&e),
            }
        }

        self.feeding.timer_mut().pause(Instant::now());
        Ok(())
    }

    /// Run one command line at wall-clock instant `now`.
    pub fn execute(&mut self, line: &str, now: Instant) -> AppResult<Flow> {
        // keep the timer current before anything looks at it
        self.feeding.timer_mut().poll(now);

        let words = tokenize(line)?;
        if words.is_empty() || words[0].starts_with('#') {
            return Ok(Flow::Continue);
        }

        let parsed = match SessionLine::try_parse_from(&words) {
            Ok(p) => p,
            Err(e) => {
                use clap::error::ErrorKind;
                return match e.kind() {
                    ErrorKind::DisplayHelp
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                        println!("{}", e.render());
                        Ok(Flow::Continue)
                    }
                    _ => Err(AppError::Command(e.render().to_string().trim().to_string())),
                };
            }
        };

        tracing::debug!(command = ?parsed.command, "session command");

        match parsed.command {
            SessionCommand::Feed(cmd) => self.feed(cmd, now)?,
            SessionCommand::Sleep(cmd) => self.sleep_cmd(cmd)?,
            SessionCommand::Diaper(cmd) => self.diaper_cmd(cmd)?,
            SessionCommand::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    // ---------------------------
    // Feeding
    // ---------------------------
    fn feed(&mut self, cmd: FeedCommand, now: Instant) -> AppResult<()> {
        match cmd {
            FeedCommand::Start { channel } => {
                let channel = Channel::parse(&channel)?;
                self.feeding.timer_mut().start(channel, now);
                self.print_timer();
            }
            FeedCommand::Pause => {
                self.feeding.timer_mut().pause(now);
                self.print_timer();
            }
            FeedCommand::Reset => {
                self.feeding.timer_mut().reset();
                self.print_timer();
            }
            FeedCommand::Status => {
                self.print_timer();
                println!(
                    "Total nursing time: {}",
                    secs2readable(self.feeding.timer().state().total_seconds())
                );
                let form = self.feeding.form();
                println!(
                    "Manual: left {} min, right {} min | Formula: {} | Pumped: {} | Notes: {}",
                    form.manual_left_minutes(),
                    form.manual_right_minutes(),
                    oz(form.formula_oz()),
                    oz(form.pumped_milk_oz()),
                    or_dash(form.notes())
                );
            }
            FeedCommand::Manual { left, right } => {
                let form = self.feeding.form_mut();
                form.set_manual_minutes(left, right);
                info(format!(
                    "Manual time: left {} min, right {} min",
                    form.manual_left_minutes(),
                    form.manual_right_minutes()
                ));
            }
            FeedCommand::Formula { oz: amount } => {
                self.feeding.form_mut().set_formula(amount);
                info(format!("Formula: {}", oz(self.feeding.form().formula_oz())));
            }
            FeedCommand::Pumped { oz: amount } => {
                self.feeding.form_mut().set_pumped_milk(amount);
                info(format!("Pumped milk: {}", oz(self.feeding.form().pumped_milk_oz())));
            }
            FeedCommand::Notes { text } => {
                self.feeding.form_mut().set_notes(text.join(" "));
            }
            FeedCommand::Log => {
                let e = self.feeding.commit(now, Local::now())?;
                success(format!(
                    "Feeding logged: left {}, right {}",
                    format_mmss(e.left_time_seconds),
                    format_mmss(e.right_time_seconds)
                ));
            }
            FeedCommand::List { json } => {
                let entries = self.feeding.log().entries();
                if json {
                    print_json(entries)?;
                } else if entries.is_empty() {
                    warning("No feeding logs yet.");
                } else {
                    let mut t = Table::new(vec![
                        Column::new("#"),
                        Column::new("Date"),
                        Column::new("Left"),
                        Column::new("Right"),
                        Column::new("Formula"),
                        Column::new("Pumped"),
                        Column::wrapped("Notes", 40),
                    ]);
                    for (i, e) in entries.iter().enumerate() {
                        t.add_row(vec![
                            (i + 1).to_string(),
                            e.timestamp_str(),
                            format_mmss(e.left_time_seconds),
                            format_mmss(e.right_time_seconds),
                            crate::export::model::format_oz(e.formula_oz),
                            crate::export::model::format_oz(e.pumped_milk_oz),
                            or_dash(&e.notes).to_string(),
                        ]);
                    }
                    print!("{}", t.render());
                }
            }
            FeedCommand::Export { format } => {
                self.export(self.feeding.log().entries(), format)?;
            }
        }
        Ok(())
    }

    fn print_timer(&self) {
        let timer = self.feeding.timer();
        let status = timer.status();
        let active = match status {
            TimerStatus::Running(c) => Some(c),
            _ => None,
        };

        println!(
            "Left: {}  Right: {}  {}",
            paint_counter(
                Channel::Left,
                &format_mmss(timer.seconds(Channel::Left)),
                active == Some(Channel::Left)
            ),
            paint_counter(
                Channel::Right,
                &format_mmss(timer.seconds(Channel::Right)),
                active == Some(Channel::Right)
            ),
            paint_status(status)
        );
    }

    // ---------------------------
    // Sleep
    // ---------------------------
    fn sleep_cmd(&mut self, cmd: SleepCommand) -> AppResult<()> {
        match cmd {
            SleepCommand::Start { time } => {
                let t = self.sleep.set_start(&time)?;
                info(format!("Start time: {}", format_12h(t)));
                self.print_sleep_preview();
            }
            SleepCommand::End { time } => {
                let t = self.sleep.set_end(&time)?;
                info(format!("End time: {}", format_12h(t)));
                self.print_sleep_preview();
            }
            SleepCommand::Notes { text } => {
                self.sleep.set_notes(text.join(" "));
            }
            SleepCommand::Log => {
                let e = self.sleep.commit(Local::now())?;
                success(format!(
                    "Sleep logged: {} → {} ({})",
                    format_12h(e.start_time),
                    format_12h(e.end_time),
                    e.duration_text
                ));
            }
            SleepCommand::List { json } => {
                let entries = self.sleep.log().entries();
                if json {
                    print_json(entries)?;
                } else if entries.is_empty() {
                    warning("No sleep logs yet.");
                } else {
                    let mut t = Table::new(vec![
                        Column::new("#"),
                        Column::new("Date"),
                        Column::new("Start"),
                        Column::new("End"),
                        Column::new("Duration"),
                        Column::wrapped("Notes", 40),
                    ]);
                    for (i, e) in entries.iter().enumerate() {
                        t.add_row(vec![
                            (i + 1).to_string(),
                            e.timestamp_str(),
                            format_12h(e.start_time),
                            format_12h(e.end_time),
                            e.duration_text.clone(),
                            or_dash(&e.notes).to_string(),
                        ]);
                    }
                    print!("{}", t.render());
                }
            }
            SleepCommand::Export { format } => {
                self.export(self.sleep.log().entries(), format)?;
            }
        }
        Ok(())
    }

    fn print_sleep_preview(&self) {
        match self.sleep.preview() {
            Some(Ok(d)) => info(format!("Duration: {}", bold(&d.to_string()))),
            Some(Err(e)) => report(&e),
            None => {}
        }
    }

    // ---------------------------
    // Diaper
    // ---------------------------
    fn diaper_cmd(&mut self, cmd: DiaperCommand) -> AppResult<()> {
        match cmd {
            DiaperCommand::Type { kind } => {
                let kind = DiaperKind::parse(&kind)?;
                let at = Local::now();
                self.diaper.select(kind, at);
                info(format!(
                    "Selected diaper type: {} ({})",
                    kind,
                    at.format(crate::models::entries::TIMESTAMP_FMT)
                ));
            }
            DiaperCommand::Image { path } => {
                let img = self.diaper.attach_file(Path::new(&path))?;
                info(format!(
                    "Image attached: {}x{} JPEG, {} KB",
                    img.width,
                    img.height,
                    img.bytes.len().div_ceil(1024)
                ));
            }
            DiaperCommand::Notes { text } => {
                self.diaper.set_notes(text.join(" "));
            }
            DiaperCommand::Log => {
                let e = self.diaper.commit()?;
                success(format!(
                    "Diaper change logged: {}{}",
                    e.kind,
                    if e.has_image() { " (with image)" } else { "" }
                ));
            }
            DiaperCommand::List { json } => {
                let entries = self.diaper.log().entries();
                if json {
                    print_json(entries)?;
                } else if entries.is_empty() {
                    warning("No diaper logs yet.");
                } else {
                    let mut t = Table::new(vec![
                        Column::new("#"),
                        Column::new("Timestamp"),
                        Column::new("Type"),
                        Column::new("Image"),
                        Column::wrapped("Notes", 40),
                    ]);
                    for (i, e) in entries.iter().enumerate() {
                        t.add_row(vec![
                            (i + 1).to_string(),
                            e.timestamp_str(),
                            e.kind.to_string(),
                            if e.has_image() { "yes" } else { "no" }.to_string(),
                            or_dash(&e.notes).to_string(),
                        ]);
                    }
                    print!("{}", t.render());
                }
            }
            DiaperCommand::Export { format } => {
                self.export(self.diaper.log().entries(), format)?;
            }
        }
        Ok(())
    }

    fn export<R: ExportRecord>(&self, entries: &[R], format: ExportFormat) -> AppResult<()> {
        ExportLogic::export(entries, format, &self.out_dir, &self.page)?;
        Ok(())
    }
}

fn print_json<R: ExportRecord>(entries: &[R]) -> AppResult<()> {
    let rows: Vec<R::Row> = entries.iter().map(R::row).collect();
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}
