use super::*;

/// A single-pass report over the lines of an integration log.
pub trait LineAnalysis {
    /// Feed one line; line numbers start at 1.
    fn process_line(&mut self, line_number: usize, line: &str) -> Result<(), AnalyzeError>;

    /// Flush pending output once the log is exhausted.
    fn finish(self) -> Result<RunSummary, AnalyzeError>;
}

/// Reports a bad line and keeps going, or stops the run, depending on skip_malformed.
fn handle_parse_error(skip_malformed: bool, summary: &mut RunSummary, line_number: usize, source: ParseError) -> Result<(), AnalyzeError> {
    if skip_malformed {
        eprintln!("Warning: skipping line {}: {}", line_number, source);
        summary.skipped += 1;
        Ok(())
    } else {
        Err(AnalyzeError::Parse { line_number, source })
    }
}

/// Splits the log into one file per track, each line holding the cylindrical
/// radius of the leg end, the cumulative radiation length and the material.
///
/// A new track is assumed whenever the radius decreases. This holds for
/// tracks that move monotonically outwards and is a heuristic otherwise.
pub struct SegmentAnalysis {
    record_prefix: String,
    skip_malformed: bool,
    name: OsString,
    write_buffer_size: usize,
    previous_rho: f64,
    files: TrackFiles,
    path: PathIntegral,
    track_summary: Option<TrackSummary>,
    summary: RunSummary,
}

impl SegmentAnalysis {
    pub fn new(name: &OsStr, options: &Options) -> Result<SegmentAnalysis, AnalyzeError> {
        Ok(SegmentAnalysis {
            record_prefix: options.record_prefix.clone(),
            skip_malformed: options.skip_malformed,
            name: name.to_os_string(),
            write_buffer_size: options.write_buffer_size,
            previous_rho: 0.,
            files: TrackFiles::new(name, options.write_buffer_size)?,
            path: PathIntegral::new(),
            track_summary: if options.write_summary { Some(TrackSummary::new()) } else { None },
            summary: RunSummary::default(),
        })
    }

    fn read_leg(line: &str) -> Result<(IntegrationLeg, f64), ParseError> {
        let leg = IntegrationLeg::parse(line)?;
        let radiation_length = leg.cumulative.radiation_length()?;
        Ok((leg, radiation_length))
    }

    fn close_track(&mut self) {
        let path = std::mem::take(&mut self.path);
        if let Some(track_summary) = self.track_summary.as_mut() {
            track_summary.update(self.files.index(), &path);
        }
        self.summary.tracks += 1;
    }
}

impl LineAnalysis for SegmentAnalysis {
    fn process_line(&mut self, line_number: usize, line: &str) -> Result<(), AnalyzeError> {
        self.summary.lines_read += 1;
        if !line.starts_with(self.record_prefix.as_str()) {
            return Ok(());
        }
        self.summary.records += 1;

        let (leg, radiation_length) = match SegmentAnalysis::read_leg(line) {
            Ok(parsed) => parsed,
            Err(source) => return handle_parse_error(self.skip_malformed, &mut self.summary, line_number, source),
        };

        let rho = leg.end.rho();
        if rho < self.previous_rho {
            self.close_track();
            self.files.rotate()?;
        }
        self.previous_rho = rho;

        self.files.write_line(&format!("{} {} {}", format_g(rho), format_g(radiation_length), leg.material))?;
        if self.track_summary.is_some() {
            self.path.push_leg(leg);
        }
        Ok(())
    }

    fn finish(mut self) -> Result<RunSummary, AnalyzeError> {
        self.close_track();
        let mut outputs = self.files.finish()?;
        if let Some(track_summary) = &self.track_summary {
            outputs.push(track_summary.print(&self.name, self.write_buffer_size)?);
        }
        self.summary.outputs = outputs;
        Ok(self.summary)
    }
}

/// Which integral a transition captures.
#[derive(Clone, Copy, Debug)]
enum Slot {
    Start,
    End,
}

/// What a line must contain to leave a phase.
#[derive(Clone, Copy, Debug)]
enum Trigger {
    Marker(&'static str),
    Integral(Slot),
}

const PHASE_TRANSITIONS: [(Phase, Trigger, Phase); 4] = [
    (Phase::SeekingStartMarker, Trigger::Marker(START_MARKER), Phase::SeekingStartIntegral),
    (Phase::SeekingStartIntegral, Trigger::Integral(Slot::Start), Phase::SeekingEndMarker),
    (Phase::SeekingEndMarker, Trigger::Marker(END_MARKER), Phase::SeekingEndIntegral),
    (Phase::SeekingEndIntegral, Trigger::Integral(Slot::End), Phase::AccumulatingEnd),
];

/// Emits, per track, the polar angle of the last step end (degrees) and the
/// radiation length accumulated between the CFPL and CSPR markers.
pub struct AngleAnalysis {
    skip_malformed: bool,
    phase: Phase,
    theta: f64,
    r_previous: f64,
    start_integral: f64,
    end_integral: f64,
    file: TrackFiles,
    summary: RunSummary,
}

impl AngleAnalysis {
    pub fn new(name: &OsStr, options: &Options) -> Result<AngleAnalysis, AnalyzeError> {
        Ok(AngleAnalysis {
            skip_malformed: options.skip_malformed,
            phase: Phase::SeekingStartMarker,
            theta: 0.,
            r_previous: 0.,
            start_integral: 0.,
            end_integral: 0.,
            file: TrackFiles::new(name, options.write_buffer_size)?,
            summary: RunSummary::default(),
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Takes every transition the line allows; one line may pass several phases.
    fn advance(&mut self, line: &str) -> Result<(), ParseError> {
        while let Some(&(_, trigger, next)) = PHASE_TRANSITIONS.iter().find(|(from, _, _)| *from == self.phase) {
            let fired = match trigger {
                Trigger::Marker(marker) => line.contains(marker),
                Trigger::Integral(slot) => match scan::find_labelled_number(line, INTEGRAL_LABEL)? {
                    Some(value) => {
                        match slot {
                            Slot::Start => self.start_integral = value,
                            Slot::End => self.end_integral = value,
                        }
                        true
                    },
                    None => false,
                },
            };
            if !fired {
                break;
            }
            self.phase = next;
        }
        Ok(())
    }

    fn scan(&mut self, line: &str) -> Result<Option<Point>, ParseError> {
        self.advance(line)?;
        scan::find_labelled_point(line, END_COORDINATES_LABEL)
    }

    fn emit(&mut self) -> Result<(), AnalyzeError> {
        let delta = self.end_integral - self.start_integral;
        self.file.write_line(&format!("{} {}", format_g(self.theta), format_g(delta)))?;
        self.summary.tracks += 1;
        Ok(())
    }
}

impl LineAnalysis for AngleAnalysis {
    fn process_line(&mut self, line_number: usize, line: &str) -> Result<(), AnalyzeError> {
        self.summary.lines_read += 1;

        let end = match self.scan(line) {
            Ok(Some(end)) => end,
            Ok(None) => return Ok(()),
            Err(source) => return handle_parse_error(self.skip_malformed, &mut self.summary, line_number, source),
        };
        self.summary.records += 1;

        let r = end.rho();
        if r < self.r_previous {
            self.emit()?;
            self.phase = Phase::SeekingStartMarker;
        }
        self.r_previous = r;
        if r > 0. {
            self.theta = r.atan2(end.z)*RAD_TO_DEG;
        }
        Ok(())
    }

    /// The last track is always emitted, complete or not.
    fn finish(mut self) -> Result<RunSummary, AnalyzeError> {
        self.emit()?;
        self.summary.outputs = self.file.finish()?;
        Ok(self.summary)
    }
}

/// Runs `analysis` over every line of `contents`.
pub fn analysis_loop<T: LineAnalysis>(contents: &str, mut analysis: T, options: &Options) -> Result<RunSummary, AnalyzeError> {
    let total_count = contents.lines().count() as u64;
    println!("Processing {} lines...", total_count);

    //Create and configure progress bar
    let bar: ProgressBar = if options.progress { ProgressBar::new(total_count) } else { ProgressBar::hidden() };
    bar.set_style(ProgressStyle::default_bar()
        .template("[{elapsed_precise}][{bar:40.cyan/blue}][{eta_precise}] {percent}%")
        .progress_chars("#>-"));

    for (line_index, line) in contents.lines().enumerate() {
        bar.inc(1);
        analysis.process_line(line_index + 1, line)?;
    }
    bar.finish();

    let summary = analysis.finish()?;
    println!("Finished!");
    Ok(summary)
}

/// Reads `input_file` and writes the report selected by `options.mode`.
pub fn analyze_file(input_file: &Path, options: &Options) -> Result<RunSummary, AnalyzeError> {
    options.validate()?;
    let bytes = std::fs::read(input_file)
        .map_err(|source| AnalyzeError::FileOpen { path: input_file.to_path_buf(), source })?;
    let contents = String::from_utf8_lossy(&bytes);
    let name = options.output_name(input_file);

    println!("{}: {}", options.mode, input_file.display());
    match options.mode {
        AnalysisMode::SEGMENTS => analysis_loop(&contents, SegmentAnalysis::new(&name, options)?, options),
        AnalysisMode::ANGLES => analysis_loop(&contents, AngleAnalysis::new(&name, options)?, options),
    }
}
