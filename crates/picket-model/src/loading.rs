// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Instance loader for maximum minimum distance placement.
//!
//! This module turns whitespace-delimited text streams into validated
//! `Instance` values. The format is the classic one used for the "aggressive
//! cows" family of problems: a header with the number of candidate positions
//! and the number of items to place, followed by the positions in any order.
//! A multi-case stream is prefixed with the number of cases.
//!
//! The parser accepts any `BufRead`, file path, raw reader, or string slice.
//! Lines may contain comments introduced by `#`, which are ignored during
//! tokenization. Position sets are always validated structurally (non-empty,
//! span fits the coordinate type); checking the placement count against the
//! number of positions can be deferred to the caller with `validate(false)`.

use crate::{
    error::InputError,
    positions::{PlacementCount, PositionSet},
};
use num_traits::PrimInt;
use std::{
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
    str::FromStr,
};

/// The error type for the instance loading process.
#[derive(Debug)]
pub enum LoaderError {
    /// An I/O error occurred while reading the input stream.
    Io(std::io::Error),
    /// The input stream ended unexpectedly (e.g., missing positions).
    UnexpectedEof,
    /// A token could not be parsed into the expected numeric type.
    Parse(ParseTokenError),
    /// The instance was read completely but is not a valid search input.
    Input(InputError),
}

/// Details about a failed token parsing attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTokenError {
    /// The string token that failed to parse.
    pub token: String,
    /// The name of the type we tried to parse into (e.g., "i64").
    pub type_name: &'static str,
}

impl std::fmt::Display for ParseTokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Could not parse token '{}' as type {}",
            self.token, self.type_name
        )
    }
}

impl std::error::Error for ParseTokenError {}

impl Display for LoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::UnexpectedEof => write!(f, "Unexpected end of file while parsing instance"),
            Self::Parse(e) => write!(f, "Parse error: {}", e),
            Self::Input(e) => write!(f, "Invalid instance: {}", e),
        }
    }
}

impl std::error::Error for LoaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Input(e) => Some(e),
            Self::UnexpectedEof => None,
        }
    }
}

impl From<std::io::Error> for LoaderError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ParseTokenError> for LoaderError {
    fn from(e: ParseTokenError) -> Self {
        Self::Parse(e)
    }
}

impl From<InputError> for LoaderError {
    fn from(e: InputError) -> Self {
        Self::Input(e)
    }
}

/// Upper bound on capacity reserved from header counts. Longer inputs grow
/// the buffer as tokens actually arrive.
const MAX_PREALLOCATED: usize = 4096;

/// A single loaded problem: candidate positions and the requested item count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instance<T> {
    positions: PositionSet<T>,
    requested_count: usize,
}

impl<T> Instance<T>
where
    T: PrimInt,
{
    /// Creates a new `Instance` without checking the count against the positions.
    #[inline]
    pub fn new(positions: PositionSet<T>, requested_count: usize) -> Self {
        Self {
            positions,
            requested_count,
        }
    }

    /// Returns the candidate positions.
    #[inline]
    pub fn positions(&self) -> &PositionSet<T> {
        &self.positions
    }

    /// Returns the item count exactly as it was read.
    #[inline]
    pub fn requested_count(&self) -> usize {
        self.requested_count
    }

    /// Returns the validated item count.
    ///
    /// # Errors
    ///
    /// Returns `InputError::InvalidCount` if the requested count is zero or
    /// exceeds the number of positions.
    #[inline]
    pub fn placement_count(&self) -> Result<PlacementCount, InputError> {
        self.positions.placement_count(self.requested_count)
    }

    /// Splits the instance into its parts.
    #[inline]
    pub fn into_parts(self) -> (PositionSet<T>, usize) {
        (self.positions, self.requested_count)
    }
}

/// A configurable loader for placement instances.
///
/// The format this parser expects is as follows (whitespace-separated tokens):
///
/// ```raw
/// N K          // number of candidate positions, number of items to place
/// p_1 ... p_N  // candidate positions, any order, duplicates allowed
/// ```
///
/// [`InstanceLoader::batch_from_str`] and friends read a leading case count
/// `C` followed by `C` instances in the format above.
///
/// # Configuration
/// * `validate`: If true (the default), the loader rejects instances whose
///   item count is zero or exceeds `N`.
///
/// # Examples
///
/// ```rust
/// # use picket_model::loading::InstanceLoader;
/// let instance = InstanceLoader::<i64>::new()
///     .from_str("5 3\n1 2 8 4 9")
///     .unwrap();
/// assert_eq!(instance.positions().len(), 5);
/// assert_eq!(instance.requested_count(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstanceLoader<T> {
    validate: bool,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Default for InstanceLoader<T> {
    fn default() -> Self {
        Self {
            validate: true,
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<T> InstanceLoader<T>
where
    T: PrimInt + FromStr,
{
    /// Creates a new `InstanceLoader` with default settings.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures whether the item count is checked against the number of
    /// positions while loading.
    #[inline]
    pub fn validate(mut self, yes: bool) -> Self {
        self.validate = yes;
        self
    }

    /// Loads one instance from a type implementing `BufRead`.
    pub fn from_bufread<R: BufRead>(&self, rdr: R) -> Result<Instance<T>, LoaderError> {
        let mut sc = Scanner::new(rdr);
        self.read_instance(&mut sc)
    }

    /// Loads a multi-case stream from a type implementing `BufRead`.
    pub fn batch_from_bufread<R: BufRead>(&self, rdr: R) -> Result<Vec<Instance<T>>, LoaderError> {
        let mut sc = Scanner::new(rdr);
        let cases: usize = sc.next()?;

        let mut instances = Vec::with_capacity(cases.min(MAX_PREALLOCATED));
        for _ in 0..cases {
            instances.push(self.read_instance(&mut sc)?);
        }
        Ok(instances)
    }

    /// Loads one instance from a file path.
    #[inline]
    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<Instance<T>, LoaderError> {
        let file = File::open(path)?;
        self.from_bufread(BufReader::new(file))
    }

    /// Loads one instance from a generic reader.
    #[inline]
    pub fn from_reader<R: Read>(&self, r: R) -> Result<Instance<T>, LoaderError> {
        self.from_bufread(BufReader::new(r))
    }

    /// Loads one instance from a string slice.
    #[inline]
    pub fn from_str(&self, s: &str) -> Result<Instance<T>, LoaderError> {
        self.from_reader(s.as_bytes())
    }

    /// Loads a multi-case stream from a file path.
    #[inline]
    pub fn batch_from_path<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<Vec<Instance<T>>, LoaderError> {
        let file = File::open(path)?;
        self.batch_from_bufread(BufReader::new(file))
    }

    /// Loads a multi-case stream from a string slice.
    #[inline]
    pub fn batch_from_str(&self, s: &str) -> Result<Vec<Instance<T>>, LoaderError> {
        self.batch_from_bufread(BufReader::new(s.as_bytes()))
    }

    fn read_instance<R: BufRead>(&self, sc: &mut Scanner<R>) -> Result<Instance<T>, LoaderError> {
        let n: usize = sc.next()?;
        let k: usize = sc.next()?;

        let mut positions = Vec::with_capacity(n.min(MAX_PREALLOCATED));
        for _ in 0..n {
            positions.push(sc.next::<T>()?);
        }

        let instance = Instance::new(PositionSet::new(positions)?, k);
        if self.validate {
            instance.placement_count()?;
        }
        Ok(instance)
    }
}

/// A helper to read whitespace-delimited tokens from a generic reader.
struct Scanner<R> {
    rdr: R,
    buf: String,
    pos: usize,
}

impl<R: BufRead> Scanner<R> {
    #[inline]
    fn new(rdr: R) -> Self {
        Self {
            rdr,
            buf: String::new(),
            pos: 0,
        }
    }

    /// Refills the line buffer. `Ok(false)` on EOF.
    #[inline]
    fn fill_line(&mut self) -> Result<bool, LoaderError> {
        self.buf.clear();
        self.pos = 0;
        let n = self.rdr.read_line(&mut self.buf)?;
        Ok(n > 0)
    }

    /// Reads the next token and parses it into `U`, skipping whitespace and
    /// `#` comments.
    fn next<U>(&mut self) -> Result<U, LoaderError>
    where
        U: FromStr,
    {
        loop {
            if self.pos >= self.buf.len() && !self.fill_line()? {
                return Err(LoaderError::UnexpectedEof);
            }

            let line = &self.buf[self.pos..];
            let content = match line.find('#') {
                Some(idx) => &line[..idx],
                None => line,
            };

            let Some(offset) = content.find(|c: char| !c.is_whitespace()) else {
                // Nothing but whitespace or a comment left on this line.
                self.pos = self.buf.len();
                continue;
            };

            let token_start = self.pos + offset;
            let rest = &self.buf[token_start..];
            let len = rest
                .find(|c: char| c.is_whitespace() || c == '#')
                .unwrap_or(rest.len());
            let token = &rest[..len];
            self.pos = token_start + len;

            return token.parse::<U>().map_err(|_| {
                LoaderError::Parse(ParseTokenError {
                    token: token.to_owned(),
                    type_name: std::any::type_name::<U>(),
                })
            });
        }
    }
}
