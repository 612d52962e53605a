//! Per-object uniforms batched into one GPU buffer.
//!
//! Every renderable's uniforms are appended to a CPU-side byte vector during the
//! frame, then written with a single `write_buffer` call. Draws select their
//! entry through a dynamic bind group offset.

use crate::context::Context;
use bytemuck::Pod;
use std::marker::PhantomData;
use std::mem;
use std::num::NonZeroU64;

/// Rounds `size` up to the next multiple of `alignment`.
#[inline]
fn align_up(size: u64, alignment: u64) -> u64 {
    size.div_ceil(alignment) * alignment
}

/// A growable uniform buffer addressed with dynamic offsets.
///
/// # Usage
///
/// ```ignore
/// let mut buffer = DynamicUniformBuffer::<ObjectUniforms>::new("object_uniforms");
///
/// buffer.clear();
/// let offsets: Vec<u32> = objects.iter().map(|o| buffer.push(&o.uniforms)).collect();
/// if buffer.flush() {
///     // the GPU buffer was reallocated: rebuild bind groups that reference it
/// }
/// ```
pub struct DynamicUniformBuffer<T: Pod> {
    data: Vec<u8>,
    buffer: wgpu::Buffer,
    capacity: u64,
    aligned_size: u64,
    count: usize,
    label: &'static str,
    _marker: PhantomData<T>,
}

impl<T: Pod> DynamicUniformBuffer<T> {
    /// Creates a buffer with room for 16 entries.
    pub fn new(label: &'static str) -> Self {
        Self::with_capacity(label, 16)
    }

    /// Creates a buffer with room for `initial_capacity` entries.
    pub fn with_capacity(label: &'static str, initial_capacity: usize) -> Self {
        let ctxt = Context::get();
        let alignment = ctxt.device.limits().min_uniform_buffer_offset_alignment as u64;
        let aligned_size = align_up(mem::size_of::<T>() as u64, alignment);
        let capacity = aligned_size * initial_capacity.max(1) as u64;

        Self {
            data: Vec::with_capacity(capacity as usize),
            buffer: ctxt.create_buffer(
                Some(label),
                capacity,
                wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            ),
            capacity,
            aligned_size,
            count: 0,
            label,
            _marker: PhantomData,
        }
    }

    /// Number of entries pushed since the last [`clear`](Self::clear).
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if no entries were pushed since the last clear.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Forgets every entry, keeping allocations.
    pub fn clear(&mut self) {
        self.data.clear();
        self.count = 0;
    }

    /// Appends an entry and returns its dynamic offset in bytes.
    pub fn push(&mut self, value: &T) -> u32 {
        let offset = self.count as u64 * self.aligned_size;

        let bytes = bytemuck::bytes_of(value);
        self.data.extend_from_slice(bytes);
        self.data
            .resize(self.data.len() + self.aligned_size as usize - bytes.len(), 0);

        self.count += 1;
        offset as u32
    }

    /// Uploads every pushed entry.
    ///
    /// Returns `true` when the GPU buffer had to be reallocated, which
    /// invalidates bind groups built on the previous one.
    pub fn flush(&mut self) -> bool {
        if self.data.is_empty() {
            return false;
        }

        let required = self.data.len() as u64;
        let reallocated = required > self.capacity;
        if reallocated {
            self.grow(required);
        }

        Context::get().write_buffer(&self.buffer, 0, &self.data);
        reallocated
    }

    fn grow(&mut self, required: u64) {
        let mut new_capacity = self.capacity;
        while new_capacity < required {
            new_capacity *= 2;
        }

        log::debug!(
            "growing {} from {} to {} bytes",
            self.label,
            self.capacity,
            new_capacity
        );

        self.buffer = Context::get().create_buffer(
            Some(self.label),
            new_capacity,
            wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        );
        self.capacity = new_capacity;
    }

    /// A binding covering exactly one entry, to be combined with a dynamic offset.
    pub fn binding(&self) -> wgpu::BindingResource<'_> {
        wgpu::BindingResource::Buffer(wgpu::BufferBinding {
            buffer: &self.buffer,
            offset: 0,
            size: NonZeroU64::new(mem::size_of::<T>() as u64),
        })
    }
}
