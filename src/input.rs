use super::*;

/// Internal representation of an analysis configuration file.
#[derive(Deserialize, Clone, Default)]
pub struct Input {
    #[serde(default)]
    pub options: Options,
}

impl Input {
    pub fn new(string: &str) -> anyhow::Result<Input> {
        toml::from_str(string).context(
            "Could not parse TOML file. Be sure options are given in an [options] table (e.g.,
            [options] mode = \"SEGMENTS\")."
        )
    }
}

///This helper function is a workaround to issue #368 in serde
fn default_false() -> bool {
    false
}

///This helper function is a workaround to issue #368 in serde
fn default_buffer_size() -> usize {
    DEFAULT_BUFFER_SIZE
}

///This helper function is a workaround to issue #368 in serde
fn default_mode() -> AnalysisMode {
    AnalysisMode::SEGMENTS
}

///This helper function is a workaround to issue #368 in serde
fn default_record_prefix() -> String {
    RECORD_PREFIX.to_string()
}

/// Analysis-level options.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Options {
    /// Prefix of the output files; the input file name when absent.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_mode")]
    pub mode: AnalysisMode,
    /// Lines starting with this prefix are read as integration records.
    #[serde(default = "default_record_prefix")]
    pub record_prefix: String,
    /// Report and skip malformed records instead of stopping the run.
    #[serde(default = "default_false")]
    pub skip_malformed: bool,
    #[serde(default = "default_buffer_size")]
    pub write_buffer_size: usize,
    /// Write `<name>summary.output` with one row per track (SEGMENTS only).
    #[serde(default = "default_false")]
    pub write_summary: bool,
    #[serde(default = "default_false")]
    pub progress: bool,
}

impl Default for Options {
    fn default() -> Options {
        Options {
            name: None,
            mode: default_mode(),
            record_prefix: default_record_prefix(),
            skip_malformed: false,
            write_buffer_size: default_buffer_size(),
            write_summary: false,
            progress: false,
        }
    }
}

impl Options {
    /// Rejects option combinations that cannot produce a meaningful run.
    pub fn validate(&self) -> Result<(), AnalyzeError> {
        if self.write_buffer_size == 0 {
            return Err(AnalyzeError::Config("write_buffer_size must be greater than zero.".to_string()));
        }
        if self.record_prefix.is_empty() {
            return Err(AnalyzeError::Config("record_prefix cannot be empty.".to_string()));
        }
        if let Some(name) = &self.name {
            if name.is_empty() {
                return Err(AnalyzeError::Config("name cannot be empty; omit it to use the input file name.".to_string()));
            }
        }
        Ok(())
    }

    /// Prefix that output file names are built from.
    pub fn output_name(&self, input_file: &Path) -> OsString {
        match &self.name {
            Some(name) => OsString::from(name),
            None => input_file.as_os_str().to_os_string(),
        }
    }
}

/// Reads and validates the options of a TOML configuration file.
pub fn load_options(config_file: &Path) -> anyhow::Result<Options> {
    let mut input_toml = String::new();
    let mut file = OpenOptions::new()
        .read(true)
        .write(false)
        .create(false)
        .open(config_file)
        .with_context(|| format!("Input error: could not open configuration file {}.", config_file.display()))?;
    file.read_to_string(&mut input_toml).context("Could not convert TOML file to string.")?;

    let input = Input::new(&input_toml)?;
    input.options.validate()?;
    Ok(input.options)
}
