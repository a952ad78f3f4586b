//! Interactive menu loop.
//!
//! A single-state read-eval loop: every choice runs one action and comes
//! back to the prompt. Only the exit choice ends the session.

use crate::display;
use chrono::NaiveDate;
use health_core::{
    append_measurements, hydration_check, parse_field, weekly_report, CalorieInput, Config,
    Error, InputError, Measurements, MetricsStore, Result,
};
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Unwrap a parsed answer, or end the action with the input error
macro_rules! answer {
    ($parsed:expr) => {
        match $parsed {
            Ok(value) => value,
            Err(e) => return Ok(Err(e)),
        }
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    LogMetrics,
    WeeklyReport,
    CalorieCalculator,
    HydrationReminder,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::LogMetrics),
            "2" => Some(MenuChoice::WeeklyReport),
            "3" => Some(MenuChoice::CalorieCalculator),
            "4" => Some(MenuChoice::HydrationReminder),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Menu session owning the store for its whole lifetime
pub struct MenuSession<R, W> {
    store: MetricsStore,
    config: Config,
    input: R,
    output: W,
    today: fn() -> NaiveDate,
}

impl<R: BufRead, W: Write> MenuSession<R, W> {
    pub fn new(store: MetricsStore, config: Config, input: R, output: W) -> Self {
        Self {
            store,
            config,
            input,
            output,
            today: local_today,
        }
    }

    /// Replace the clock, for deterministic dates
    #[cfg(test)]
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Run until the exit choice; the table is saved on the way out.
    ///
    /// Returns the store so callers can inspect the final table.
    pub fn run(mut self) -> Result<MetricsStore> {
        loop {
            self.print_menu()?;
            let choice = self.prompt("Enter your choice: ")?;

            match MenuChoice::parse(&choice) {
                Some(MenuChoice::LogMetrics) => {
                    self.log_metrics()?;
                    self.store.save()?;
                }
                Some(MenuChoice::WeeklyReport) => self.weekly_report()?,
                Some(MenuChoice::CalorieCalculator) => self.calorie_calculator()?,
                Some(MenuChoice::HydrationReminder) => self.hydration_reminder()?,
                Some(MenuChoice::Exit) => {
                    self.store.save()?;
                    writeln!(self.output, "Exited the program.")?;
                    self.output.flush()?;
                    return Ok(self.store);
                }
                None => {
                    tracing::debug!("Unrecognised menu choice {:?}", choice.trim());
                    writeln!(self.output, "Invalid choice.")?;
                }
            }
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\nHealth & Fitness Tracker")?;
        writeln!(self.output, "1. Log Daily Metrics")?;
        writeln!(self.output, "2. View Weekly Report")?;
        writeln!(self.output, "3. BMI & Calorie Calculator")?;
        writeln!(self.output, "4. Hydration Reminder")?;
        writeln!(self.output, "5. Exit")?;
        Ok(())
    }

    /// Print `label`, then read one line. A closed input is fatal.
    fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::UnexpectedEof);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Prompt for one answer and parse it straight away
    fn prompt_field<T: FromStr>(
        &mut self,
        label: &str,
        field: &'static str,
    ) -> Result<std::result::Result<T, InputError>> {
        let answer = self.prompt(label)?;
        Ok(parse_field(field, &answer))
    }

    /// Ask for each measurement in turn, stopping at the first bad answer
    fn read_measurements(&mut self) -> Result<std::result::Result<Measurements, InputError>> {
        Ok(Ok(Measurements {
            steps: answer!(self.prompt_field("Steps walked: ", "steps")?),
            sleep_hours: answer!(self.prompt_field("Sleep hours: ", "sleep_hours")?),
            calories: answer!(self.prompt_field("Calories consumed: ", "calories")?),
            water_liters: answer!(self.prompt_field("Water intake (liters): ", "water_liters")?),
            weight: answer!(self.prompt_field("Weight (kg): ", "weight")?),
            height: answer!(self.prompt_field("Height (m): ", "height")?),
        }))
    }

    /// Gender is asked first but only checked after the numbers
    fn read_calorie_input(&mut self) -> Result<std::result::Result<CalorieInput, InputError>> {
        let gender = self.prompt("Gender (M/F): ")?;
        let weight_kg = answer!(self.prompt_field("Weight (kg): ", "weight")?);
        let height_cm = answer!(self.prompt_field("Height (cm): ", "height_cm")?);
        let age_years = answer!(self.prompt_field("Age: ", "age")?);
        let activity = self.prompt("Activity Level (Sedentary, Light, Moderate, Active): ")?;
        Ok(CalorieInput::from_parts(
            &gender, weight_kg, height_cm, age_years, &activity,
        ))
    }

    fn log_metrics(&mut self) -> Result<()> {
        writeln!(self.output, "\n--- Log Today's Metrics ---")?;
        let measurements = self.read_measurements()?;

        let today = (self.today)();
        match measurements.map(|m| append_measurements(&mut self.store, &m, today)) {
            Ok(record) => display::logged(&mut self.output, &record)?,
            Err(e) => {
                tracing::debug!("Rejected metrics entry: {:?}", e);
                writeln!(self.output, "{}", e)?;
            }
        }
        Ok(())
    }

    fn weekly_report(&mut self) -> Result<()> {
        writeln!(self.output, "\n--- Weekly Health Report ---")?;
        let window_days = self.config.report.window_days;
        let report = weekly_report(self.store.records(), (self.today)(), window_days);
        display::weekly_report(&mut self.output, report.as_ref(), window_days)?;
        Ok(())
    }

    fn calorie_calculator(&mut self) -> Result<()> {
        writeln!(self.output, "\n--- Calorie Calculator ---")?;
        match self.read_calorie_input()? {
            Ok(input) => display::calories(&mut self.output, &input)?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(())
    }

    fn hydration_reminder(&mut self) -> Result<()> {
        let reminder = hydration_check(
            self.store.records(),
            (self.today)(),
            self.config.hydration.min_liters,
        );
        if let Some(reminder) = reminder {
            writeln!(self.output, "{}", reminder)?;
        }
        Ok(())
    }
}

pub fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
