use clap::Subcommand;
use intervalo_core::format::time_label;
use intervalo_core::{JsonStore, SettingsForm, WorkoutSettings};

use super::load_workout;

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Print the saved workout settings
    Show {
        #[arg(long)]
        json: bool,
    },
    /// Change workout settings
    Set {
        /// Activity length as mm:ss or seconds (up to 30:59)
        #[arg(long, value_parser = parse_duration)]
        activity: Option<u32>,
        /// Interval length as mm:ss or seconds (up to 30:59, 0 disables)
        #[arg(long, value_parser = parse_duration)]
        interval: Option<u32>,
        /// Number of sets (1-20)
        #[arg(long)]
        sets: Option<u32>,
        /// Finish with an interval after the last activity
        #[arg(long, action = clap::ArgAction::Set)]
        last_interval: Option<bool>,
        /// Ring the terminal bell on cues
        #[arg(long, action = clap::ArgAction::Set)]
        sound: Option<bool>,
    },
    /// Restore the default settings
    Reset,
}

/// Parse `mm:ss` or a plain number of seconds.
fn parse_duration(s: &str) -> Result<u32, String> {
    let s = s.trim();
    match s.split_once(':') {
        Some((min, sec)) => {
            let min: u32 = min
                .parse()
                .map_err(|_| format!("invalid minutes in '{s}'"))?;
            let sec: u32 = sec
                .parse()
                .map_err(|_| format!("invalid seconds in '{s}'"))?;
            if sec >= 60 {
                return Err(format!("seconds must be below 60 in '{s}'"));
            }
            min.checked_mul(60)
                .and_then(|m| m.checked_add(sec))
                .ok_or_else(|| format!("duration '{s}' is too long"))
        }
        None => s
            .parse()
            .map_err(|_| format!("expected mm:ss or seconds, got '{s}'")),
    }
}

fn print_settings(settings: &WorkoutSettings, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(settings)?);
        return Ok(());
    }
    println!("activity:      {}", time_label(u64::from(settings.activity_secs)));
    println!("interval:      {}", time_label(u64::from(settings.interval_secs)));
    println!("sets:          {}", settings.set_count);
    println!("last interval: {}", settings.has_last_interval);
    println!("sound:         {}", settings.use_sound);
    println!("total:         {}", time_label(settings.total_secs()));
    Ok(())
}

pub fn run(action: SettingsAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        SettingsAction::Show { json } => {
            let (_store, settings, _config) = load_workout()?;
            print_settings(&settings, json)?;
        }
        SettingsAction::Set {
            activity,
            interval,
            sets,
            last_interval,
            sound,
        } => {
            let (mut store, settings, config) = load_workout()?;
            let mut form = SettingsForm::new(&settings, config.picker)?;
            if let Some(secs) = activity {
                form.set_activity(secs)?;
            }
            if let Some(secs) = interval {
                form.set_interval(secs)?;
            }
            if let Some(n) = sets {
                form.set_sets(n)?;
            }
            if let Some(value) = last_interval {
                form.set_has_last_interval(value);
            }
            if let Some(value) = sound {
                form.set_use_sound(value);
            }
            let saved = form.commit(&mut store)?;
            print_settings(&saved, false)?;
        }
        SettingsAction::Reset => {
            let mut store = JsonStore::open_default()?;
            let config = intervalo_core::Config::load()?;
            let mut form = SettingsForm::new(&WorkoutSettings::default(), config.picker)?;
            let saved = form.commit(&mut store)?;
            print_settings(&saved, false)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_durations() {
        assert_eq!(parse_duration("1:35"), Ok(95));
        assert_eq!(parse_duration("00:05"), Ok(5));
        assert_eq!(parse_duration("95"), Ok(95));
        assert!(parse_duration("1:75").is_err());
        assert!(parse_duration("abc").is_err());
        assert!(parse_duration("-3").is_err());
    }

    #[test]
    fn rejects_minutes_that_overflow() {
        assert_eq!(parse_duration("71582788:15"), Ok(u32::MAX));
        assert!(parse_duration("71582789:00").is_err());
        assert!(parse_duration("4294967295:00").is_err());
    }
}
