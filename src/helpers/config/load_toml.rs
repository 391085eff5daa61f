use super::*;

pub const DEFAULT_TOML_PATH: &str = "observer-demo.toml";

pub fn try_set(
    builder: &mut ConfigBuilder,
    file: &str,
    name: &str,
    value: toml::Value,
) -> Result<(), Box<dyn Error>> {
    let value = match value {
        toml::Value::Integer(i) => ConfigValue::Int(i),
        toml::Value::String(s) => ConfigValue::Text(s),
        other => {
            return Err(format!(
                "{} is not valid for {} (only ints and strings are accepted)",
                other, name
            )
            .into())
        }
    };
    builder.set(name, value, format!("{} in {}", name, file))
}

pub fn load_toml(
    path: &str,
    builder: &mut ConfigBuilder,
    fs: &dyn FilesystemTrait,
) -> Result<(), Box<dyn Error>> {
    let contents = fs
        .read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path, e))?;
    let parsed = contents
        .parse::<toml::Value>()
        .map_err(|e| format!("failed to parse {}: {}", path, e))?;
    match parsed {
        toml::Value::Table(table) => {
            for (name, value) in table {
                try_set(builder, path, &name, value).map_err(|e| format!("{}: {}", path, e))?;
            }
            Ok(())
        }
        _ => Err(format!("toplevel value of {} is not a table", path).into()),
    }
}
