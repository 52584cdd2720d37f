use super::*;

/// Formats a float like printf's `%g`: six significant digits, trailing
/// zeros removed, exponent form below 1e-4 and from 1e6 upward.
pub fn format_g(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0. { "inf" } else { "-inf" }.to_string();
    }
    if value == 0. {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    //Round to the output precision first; the exponent may change (9.9999996 -> 1e1)
    let scientific = format!("{:.*e}", (G_PRECISION - 1) as usize, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => return scientific,
    };

    if exponent < -4 || exponent >= G_PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (G_PRECISION - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

/// `<name><index>`, e.g. `run.log0`, `run.log1`, ...
pub fn track_file_name(name: &OsStr, index: usize) -> PathBuf {
    let mut file_name = name.to_os_string();
    file_name.push(index.to_string());
    PathBuf::from(file_name)
}

fn open_output(path: &Path, capacity: usize) -> Result<BufWriter<File>, AnalyzeError> {
    println!("Opening file: {}", path.display());
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|source| AnalyzeError::Output { path: path.to_path_buf(), source })?;
    Ok(BufWriter::with_capacity(capacity, file))
}

/// Numbered output files, one per track, with a single file open at a time.
pub struct TrackFiles {
    name: OsString,
    capacity: usize,
    index: usize,
    path: PathBuf,
    stream: Option<BufWriter<File>>,
    written: Vec<PathBuf>,
}

impl TrackFiles {
    /// Opens `<name>0`.
    pub fn new(name: &OsStr, capacity: usize) -> Result<TrackFiles, AnalyzeError> {
        let path = track_file_name(name, 0);
        let stream = open_output(&path, capacity)?;

        Ok(TrackFiles {
            name: name.to_os_string(),
            capacity,
            index: 0,
            path: path.clone(),
            stream: Some(stream),
            written: vec![path],
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn output_error(&self, source: std::io::Error) -> AnalyzeError {
        AnalyzeError::Output { path: self.path.clone(), source }
    }

    /// Flushes and closes the current file, then opens the next one.
    pub fn rotate(&mut self) -> Result<(), AnalyzeError> {
        self.close()?;
        self.index += 1;
        self.path = track_file_name(&self.name, self.index);
        self.stream = Some(open_output(&self.path, self.capacity)?);
        self.written.push(self.path.clone());
        Ok(())
    }

    pub fn write_line(&mut self, line: &str) -> Result<(), AnalyzeError> {
        let result = match self.stream.as_mut() {
            Some(stream) => writeln!(stream, "{}", line),
            None => Err(std::io::Error::new(std::io::ErrorKind::Other, "output file already closed")),
        };
        result.map_err(|source| self.output_error(source))
    }

    fn close(&mut self) -> Result<(), AnalyzeError> {
        if let Some(mut stream) = self.stream.take() {
            stream.flush().map_err(|source| self.output_error(source))?;
        }
        Ok(())
    }

    /// Closes the last file and returns every file written, in order.
    pub fn finish(mut self) -> Result<Vec<PathBuf>, AnalyzeError> {
        self.close()?;
        Ok(self.written)
    }
}

/// One row of the per-track summary.
pub struct TrackRow {
    pub track: usize,
    pub legs: usize,
    pub integral: IntegrationData,
}

/// Per-track totals, written to `<name>summary.output`.
#[derive(Default)]
pub struct TrackSummary {
    pub rows: Vec<TrackRow>,
}

impl TrackSummary {
    pub fn new() -> TrackSummary {
        TrackSummary {
            rows: vec![]
        }
    }

    pub fn update(&mut self, track: usize, path: &PathIntegral) {
        self.rows.push(TrackRow {
            track,
            legs: path.num_legs(),
            integral: path.integral(),
        });
    }

    pub fn print(&self, name: &OsStr, capacity: usize) -> Result<PathBuf, AnalyzeError> {
        let mut file_name = name.to_os_string();
        file_name.push(SUMMARY_SUFFIX);
        let path = PathBuf::from(file_name);
        let mut stream = open_output(&path, capacity)?;

        let output_error = |source: std::io::Error| AnalyzeError::Output { path: path.clone(), source };
        writeln!(stream, "track, legs, radiation_length, interaction_length, bend_integral, path_length, steps")
            .map_err(output_error)?;
        for row in &self.rows {
            let values = row.integral.values().iter().map(|value| format_g(*value)).join(", ");
            writeln!(stream, "{}, {}, {},", row.track, row.legs, values).map_err(output_error)?;
        }
        stream.flush().map_err(output_error)?;
        Ok(path)
    }
}

/// What one analysis run read and wrote.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RunSummary {
    pub lines_read: usize,
    /// Lines recognised as records (SEGMENTS) or end coordinates (ANGLES).
    pub records: usize,
    pub skipped: usize,
    pub tracks: usize,
    pub outputs: Vec<PathBuf>,
}
