use super::*;

/// A value read from a config source
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    Int(i64),
    Text(String),
}

impl ConfigValue {
    fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Text(_) => "string",
        }
    }
}

impl std::fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{}", i),
            Self::Text(s) => write!(f, "{:?}", s),
        }
    }
}

/// Receives the value and a description of where it came from ("default" if nothing set it)
type ApplyFn = Box<dyn Fn(&mut MasterConfig, &ConfigValue, &str) -> Result<(), Box<dyn Error>>>;

/// One named option. Holds its default until a config source replaces it, then applies
/// whichever value it ended up with to a MasterConfig.
pub struct ConfigEntry {
    name: String,
    help: String,
    value: ConfigValue,
    source: String,
    apply_fn: ApplyFn,
}

impl ConfigEntry {
    fn new(name: &str, help: String, default_value: ConfigValue, apply_fn: ApplyFn) -> Self {
        Self {
            name: name.to_string(),
            help,
            value: default_value,
            source: "default".to_string(),
            apply_fn,
        }
    }

    pub fn new_int<F>(name: &str, help: &str, default_value: i64, apply: F) -> Self
    where
        F: Fn(&mut MasterConfig, i64, &str) -> Result<(), Box<dyn Error>> + 'static,
    {
        Self::new(
            name,
            help.to_string(),
            ConfigValue::Int(default_value),
            Box::new(move |conf: &mut MasterConfig, value: &ConfigValue, source: &str| {
                match value {
                    ConfigValue::Int(i) => apply(conf, *i, source),
                    other => Err(format!("{} is not an int", other).into()),
                }
            }),
        )
    }

    /// A string option that must be one of the given choices. The first choice is the default.
    pub fn new_choice(name: &str, help: &str, choices: Vec<ConfigChoice>) -> Self {
        assert!(!choices.is_empty(), "{} has no choices", name);
        let mut help = help.to_string();
        for choice in &choices {
            help.push_str(&format!("\n  {}: {}", choice.name, choice.help));
        }
        let default_value = ConfigValue::Text(choices[0].name.to_string());
        Self::new(
            name,
            help,
            default_value,
            Box::new(move |conf: &mut MasterConfig, value: &ConfigValue, source: &str| {
                let chosen = match value {
                    ConfigValue::Text(text) => choices.iter().find(|c| c.name == text.as_str()),
                    ConfigValue::Int(_) => None,
                };
                match chosen {
                    Some(choice) => {
                        (choice.apply_fn)(conf);
                        Ok(())
                    }
                    None => Err(format!(
                        "{} has invalid value {}, valid options are {}",
                        source,
                        value,
                        choices
                            .iter()
                            .map(|c| c.name)
                            .collect::<Vec<&str>>()
                            .join(", "),
                    )
                    .into()),
                }
            }),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    /// Replaces the value. It must be the same type as the default.
    pub fn set(&mut self, value: ConfigValue, source: String) -> Result<(), Box<dyn Error>> {
        if value.type_name() != self.value.type_name() {
            return Err(format!(
                "{} is not valid for {} (expected: {})",
                value,
                self.name,
                self.value.type_name()
            )
            .into());
        }
        self.value = value;
        self.source = source;
        Ok(())
    }

    fn apply_to(&self, target: &mut MasterConfig) -> Result<(), Box<dyn Error>> {
        (self.apply_fn)(target, &self.value, &self.source)
    }
}

/// One of the values a choice entry accepts
pub struct ConfigChoice {
    name: &'static str,
    help: &'static str,
    apply_fn: Box<dyn Fn(&mut MasterConfig)>,
}

impl ConfigChoice {
    pub fn new<F: Fn(&mut MasterConfig) + 'static>(
        name: &'static str,
        help: &'static str,
        apply: F,
    ) -> Self {
        Self {
            name,
            help,
            apply_fn: Box::new(apply),
        }
    }
}

pub struct ConfigBuilder {
    entries: Vec<ConfigEntry>,
}

impl ConfigBuilder {
    pub fn new(entries: Vec<ConfigEntry>) -> Self {
        let mut names = HashSet::new();
        for entry in &entries {
            if !names.insert(entry.name()) {
                panic!("duplicate configuration entry {}", entry.name());
            }
        }
        Self { entries }
    }

    /// Name and help text of every entry, in application order
    pub fn describe(&self) -> Vec<(&str, &str)> {
        self.entries.iter().map(|e| (e.name(), e.help())).collect()
    }

    pub fn set(
        &mut self,
        name: &str,
        value: ConfigValue,
        source: String,
    ) -> Result<(), Box<dyn Error>> {
        match self.entries.iter().position(|e| e.name() == name) {
            Some(i) => self.entries[i].set(value, source),
            None => {
                let valid: Vec<&str> = self.describe().into_iter().map(|(n, _)| n).collect();
                Err(format!(
                    "{} is not a valid option (valid options are {})",
                    name,
                    valid.join(", ")
                )
                .into())
            }
        }
    }

    pub fn apply_to(&self, target: &mut MasterConfig) -> Result<(), Box<dyn Error>> {
        for entry in &self.entries {
            entry
                .apply_to(target)
                .map_err(|e| format!("{} configuration option: {}", entry.name(), e))?;
        }
        Ok(())
    }
}
