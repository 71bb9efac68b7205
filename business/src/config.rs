use log::info;
use serde::Deserialize;

/// Prefix for environment variables read by [`GridOptions::from_env`].
pub const ENV_PREFIX: &str = "DATAGRID_";

/// Presentation and behavior options for one grid instance.
#[derive(Debug, Clone, PartialEq)]
pub struct GridOptions {
    /// Clicking a row opens an edit session on it.
    pub is_row_editable: bool,
    pub striped: bool,
    pub resizable: bool,
    pub row_height: f32,
    pub header_height: f32,
    /// Shown below the header when the dataset is empty.
    pub empty_text: String,
    /// Lower bound for columns sized by the layout engine.
    pub min_column_width: f32,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            is_row_editable: false,
            striped: true,
            resizable: true,
            row_height: 28.0,
            header_height: 24.0,
            empty_text: "No data available".to_owned(),
            min_column_width: 60.0,
        }
    }
}

/// Environment overrides; every field is optional.
#[derive(Debug, Default, Deserialize)]
struct RawGridOptions {
    editable: Option<bool>,
    striped: Option<bool>,
    resizable: Option<bool>,
    row_height: Option<f32>,
    header_height: Option<f32>,
    empty_text: Option<String>,
}

impl GridOptions {
    /// Read `DATAGRID_*` variables from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(std::env::vars())
    }

    /// Read `DATAGRID_*` variables from an explicit list.
    ///
    /// Variables without the prefix are ignored, missing ones keep their
    /// defaults.
    pub fn from_vars<I, K, V>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let scoped: Vec<(String, String)> = vars
            .into_iter()
            .filter_map(|(key, value)| {
                key.as_ref()
                    .strip_prefix(ENV_PREFIX)
                    .map(|name| (name.to_owned(), value.as_ref().to_owned()))
            })
            .collect();

        let raw: RawGridOptions = if scoped.is_empty() {
            RawGridOptions::default()
        } else {
            serde_env::from_iter(scoped)?
        };

        Self::from_raw(raw)
    }

    fn from_raw(raw: RawGridOptions) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let RawGridOptions {
            editable,
            striped,
            resizable,
            row_height,
            header_height,
            empty_text,
        } = raw;

        let row_height = positive("ROW_HEIGHT", row_height)?.unwrap_or(defaults.row_height);
        let header_height =
            positive("HEADER_HEIGHT", header_height)?.unwrap_or(defaults.header_height);

        let options = Self {
            is_row_editable: editable.unwrap_or(defaults.is_row_editable),
            striped: striped.unwrap_or(defaults.striped),
            resizable: resizable.unwrap_or(defaults.resizable),
            row_height,
            header_height,
            empty_text: empty_text.unwrap_or(defaults.empty_text),
            min_column_width: defaults.min_column_width,
        };

        info!(
            "grid options: editable={}, striped={}, row_height={}",
            options.is_row_editable, options.striped, options.row_height
        );
        Ok(options)
    }
}

fn positive(name: &str, value: Option<f32>) -> anyhow::Result<Option<f32>> {
    match value {
        Some(value) if value.is_nan() || value <= 0.0 => {
            anyhow::bail!("{ENV_PREFIX}{name} must be a positive number, got {value}")
        }
        other => Ok(other),
    }
}
