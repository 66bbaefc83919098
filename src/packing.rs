//! Packing strategies
//!
//! Converts a caller dataset into the memory arrangement an accumulator
//! consumes:
//!
//! - [`UnpackedBuffer`]: one aligned, contiguous buffer per variable.
//! - [`PackedBuffer`]: variables interleaved `lanes` at a time, so element
//!   `r * lanes + l` of a group is sample `r` of the group's variable `l`.
//!   The last group is zero-padded when the variable count is not a multiple
//!   of `lanes`; padded lanes are computed and discarded.
//!
//! Packing is deterministic: the same dataset and lane count always produce
//! the same buffer.

use fast_stats_core::{AlignedBuffer, Error, Result, Sample};

/// Contiguous per-variable storage
#[derive(Debug)]
pub struct UnpackedBuffer<T: Sample> {
    variables: Vec<AlignedBuffer<T>>,
}

impl<T: Sample> UnpackedBuffer<T> {
    /// Copy every variable, converting to `T`
    pub fn from_dataset<V: AsRef<[f64]>>(dataset: &[V]) -> Result<Self> {
        let variables = dataset
            .iter()
            .map(|variable| {
                let samples = variable.as_ref();
                let mut buffer = AlignedBuffer::zeroed(samples.len())?;
                for (dst, &src) in buffer.as_mut_slice().iter_mut().zip(samples) {
                    *dst = T::narrow(src);
                }
                Ok(buffer)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { variables })
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    /// Samples of variable `index`
    pub fn variable(&self, index: usize) -> Option<&[T]> {
        self.variables.get(index).map(AlignedBuffer::as_slice)
    }

    /// Variables in dataset order
    pub fn iter(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.variables.iter().map(AlignedBuffer::as_slice)
    }
}

/// Interleaved storage for equal-length variables
#[derive(Debug)]
pub struct PackedBuffer<T: Sample> {
    data: AlignedBuffer<T>,
    lanes: usize,
    rows: usize,
    num_variables: usize,
}

impl<T: Sample> PackedBuffer<T> {
    /// Interleave `dataset` into groups of `lanes` variables
    ///
    /// Every variable must have the same non-zero length.
    pub fn pack<V: AsRef<[f64]>>(dataset: &[V], lanes: usize) -> Result<Self> {
        if lanes == 0 {
            return Err(Error::Configuration("packed layout needs at least one lane".to_string()));
        }
        let num_variables = dataset.len();
        if num_variables == 0 {
            return Err(Error::empty_dataset());
        }
        let rows = dataset[0].as_ref().len();
        if rows == 0 {
            return Err(Error::empty_variable(0));
        }
        let num_groups = num_variables.div_ceil(lanes);
        let group_len = rows * lanes;
        let mut data = AlignedBuffer::zeroed(num_groups * group_len)?;

        let out = data.as_mut_slice();
        for (index, variable) in dataset.iter().enumerate() {
            let samples = variable.as_ref();
            if samples.len() != rows {
                return Err(Error::length_mismatch(index, rows, samples.len()));
            }
            let base = (index / lanes) * group_len + index % lanes;
            for (r, &x) in samples.iter().enumerate() {
                out[base + r * lanes] = T::narrow(x);
            }
        }

        Ok(Self {
            data,
            lanes,
            rows,
            num_variables,
        })
    }

    /// Variables per group
    pub fn lanes(&self) -> usize {
        self.lanes
    }

    /// Samples per variable
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Real (non-padding) variables
    pub fn num_variables(&self) -> usize {
        self.num_variables
    }

    pub fn num_groups(&self) -> usize {
        self.num_variables.div_ceil(self.lanes)
    }

    /// Interleaved samples of group `g`
    pub fn group(&self, g: usize) -> Option<&[T]> {
        let len = self.rows * self.lanes;
        self.data.as_slice().get(g * len..(g + 1) * len)
    }

    /// Groups in order, with the number of real variables each holds
    pub fn groups(&self) -> impl Iterator<Item = (&[T], usize)> + '_ {
        let len = self.rows * self.lanes;
        self.data
            .as_slice()
            .chunks_exact(len)
            .enumerate()
            .map(move |(g, group)| (group, (self.num_variables - g * self.lanes).min(self.lanes)))
    }

    /// The whole interleaved buffer including padding lanes
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    /// De-interleave variable `index` back into contiguous order
    pub fn variable(&self, index: usize) -> Option<Vec<T>> {
        if index >= self.num_variables {
            return None;
        }
        let lane = index % self.lanes;
        let group = self.group(index / self.lanes)?;
        Some(group.iter().skip(lane).step_by(self.lanes).copied().collect())
    }
}

/// Materialized buffer in one of the two arrangements
#[derive(Debug)]
pub enum Buffer<T: Sample> {
    Unpacked(UnpackedBuffer<T>),
    Packed(PackedBuffer<T>),
}

impl<T: Sample> Buffer<T> {
    pub fn num_variables(&self) -> usize {
        match self {
            Buffer::Unpacked(b) => b.num_variables(),
            Buffer::Packed(b) => b.num_variables(),
        }
    }

    /// Contiguous copy of variable `index`
    pub fn variable(&self, index: usize) -> Option<Vec<T>> {
        match self {
            Buffer::Unpacked(b) => b.variable(index).map(<[T]>::to_vec),
            Buffer::Packed(b) => b.variable(index),
        }
    }
}
