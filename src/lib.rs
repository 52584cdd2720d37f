#![allow(non_snake_case)]
#![allow(non_camel_case_types)]

use std::fmt;
use std::ffi::{OsStr, OsString};
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::path::{Path, PathBuf};

//Error handling crates
use anyhow::Context;
use thiserror::Error;

//Serializing/Deserializing crate
use serde::*;

//Command line value parsing
use clap::ValueEnum;

//I/O
use std::fs::{File, OpenOptions};
use std::io::prelude::*;
use std::io::BufWriter;

//itertools
use itertools::{EitherOrBoth, Itertools};

//Progress bar
use indicatif::{ProgressBar, ProgressStyle};

//Math
use std::f64::consts::PI;

//Load internal modules
pub mod point;
pub mod data;
pub mod leg;
pub mod path;
pub mod scan;
pub mod analysis;
pub mod input;
pub mod output;
pub mod enums;
pub mod consts;
pub mod errors;


pub use crate::enums::*;
pub use crate::consts::*;
pub use crate::errors::{ParseError, AnalyzeError};
pub use crate::point::Point;
pub use crate::data::IntegrationData;
pub use crate::leg::{IntegrationLeg, RecordFields, split_record};
pub use crate::path::PathIntegral;
pub use crate::input::{Input, Options, load_options};
pub use crate::output::{RunSummary, TrackFiles, TrackSummary, format_g};
pub use crate::analysis::{LineAnalysis, SegmentAnalysis, AngleAnalysis, analysis_loop, analyze_file};
