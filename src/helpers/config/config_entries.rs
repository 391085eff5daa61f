use super::*;

/// These entries will be applied in order of returned vec (NOT in the order they appear in the
/// file). All entries will always be applied.
pub fn config_entries() -> Vec<ConfigEntry> {
    vec![
        ConfigEntry::new_choice(
            "state_source",
            "how the subject picks each new state",
            vec![
                ConfigChoice::new("random", "uniformly random in 0..state_range", |conf| {
                    conf.state_source = StateSourceKind::Random
                }),
                ConfigChoice::new("cycle", "count up from 0 and wrap at state_range", |conf| {
                    conf.state_source = StateSourceKind::Cycle
                }),
            ],
        ),
        ConfigEntry::new_int(
            "state_seed",
            "seed for random states, or negative to seed from system entropy",
            -1,
            |conf, seed, _| {
                conf.state_seed = if seed < 0 { None } else { Some(seed as u64) };
                Ok(())
            },
        ),
        ConfigEntry::new_int(
            "state_range",
            "new states are picked from 0 up to but not including this",
            10,
            |conf, range, source| {
                if range > 0 {
                    conf.state_range = range;
                    Ok(())
                } else {
                    Err(format!("{} should be positive", source).into())
                }
            },
        ),
        ConfigEntry::new_int(
            "settle_millis",
            "milliseconds the subject pauses between changing state and announcing it",
            15,
            |conf, millis, source| {
                if millis >= 0 {
                    conf.settle_time = Duration::from_millis(millis as u64);
                    Ok(())
                } else {
                    Err(format!("{} should not be negative", source).into())
                }
            },
        ),
    ]
}
