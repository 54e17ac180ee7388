use std::marker::PhantomData;

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::sampling::MAX_SUBDIVISION;

/// Uniform buffer holding one `T`, allocated once and rewritten in place.
pub struct UniformBuffer<T: Pod> {
    buffer: wgpu::Buffer,
    _marker: PhantomData<T>,
}

impl<T: Pod> UniformBuffer<T> {
    pub fn new(device: &wgpu::Device, label: &str, initial: &T) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::bytes_of(initial),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        Self {
            buffer,
            _marker: PhantomData,
        }
    }

    pub fn write(&self, queue: &wgpu::Queue, value: &T) {
        queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(value));
    }

    pub fn binding(&self) -> wgpu::BindingResource<'_> {
        self.buffer.as_entire_binding()
    }
}

/// Immutable read-only storage buffer.
///
/// wgpu rejects zero-sized bindings, so an empty slice uploads one zeroed
/// element; shaders must bound their loops by an explicit count.
pub struct StorageBuffer {
    buffer: wgpu::Buffer,
}

impl StorageBuffer {
    pub fn from_slice<T: Pod + Zeroable>(device: &wgpu::Device, label: &str, data: &[T]) -> Self {
        let placeholder = [T::zeroed()];
        let contents: &[T] = if data.is_empty() { &placeholder } else { data };
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(contents),
            usage: wgpu::BufferUsages::STORAGE,
        });
        Self { buffer }
    }

    pub fn binding(&self) -> wgpu::BindingResource<'_> {
        self.buffer.as_entire_binding()
    }
}

/// Storage buffer sized for the largest jitter pattern, rewritten every frame.
pub struct JitterBuffer {
    buffer: wgpu::Buffer,
}

impl JitterBuffer {
    /// Capacity in `f32`s: two per sample at the maximum subdivision level.
    pub const CAPACITY: usize = 2 * (MAX_SUBDIVISION * MAX_SUBDIVISION) as usize;

    pub fn new(device: &wgpu::Device, label: &str) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: (Self::CAPACITY * std::mem::size_of::<f32>()) as u64,
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        Self { buffer }
    }

    /// Writes `offsets` at the start of the buffer; anything past capacity is dropped.
    pub fn write(&self, queue: &wgpu::Queue, offsets: &[f32]) {
        let n = offsets.len().min(Self::CAPACITY);
        if n < offsets.len() {
            log::warn!("jitter pattern of {} values truncated to {n}", offsets.len());
        }
        if n == 0 {
            return;
        }
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&offsets[..n]));
    }

    pub fn binding(&self) -> wgpu::BindingResource<'_> {
        self.buffer.as_entire_binding()
    }
}
