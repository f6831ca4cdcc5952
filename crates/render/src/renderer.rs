//! Windowed wgpu renderer.
//!
//! Draws the ball collection with a fullscreen ray-casting shader: every
//! pixel unprojects into a world ray, intersects it analytically against the
//! ball buffer and shades the nearest hit. The window, surface and event
//! pumping all live here so the frame driver only sees four operations:
//! advance the controls, rotate the light, upload the scene, render.

use std::time::Duration;

use anyhow::{Context, Result};
use glam::{Quat, Vec3};
use wgpu::util::DeviceExt;
use winit::event::{DeviceEvent, ElementState, Event, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::EventLoop;
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowBuilder};

use physics::{Ball, Bounds};

use crate::camera::{OrbitCamera, FAR};
use crate::gpu_types::{BallGpu, CameraUniform, SceneUniform};

/// Light rotation rate about the world Y axis, radians per second.
const LIGHT_ROTATE_RATE: f32 = std::f32::consts::PI / 6.0;

pub struct Renderer {
    event_loop: EventLoop<()>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    camera: OrbitCamera,
    camera_buffer: wgpu::Buffer,
    scene_buffer: wgpu::Buffer,
    balls_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    bind_group_layout: wgpu::BindGroupLayout,
    window: Window,
    bounds: Bounds,
    light_dir: Vec3,
    ball_count: u32,
    dragging: bool,
}

impl Renderer {
    /// Create a renderer and open a window looking at the given box.
    ///
    /// # Errors
    ///
    /// Fails when the event loop, window, adapter or device cannot be
    /// created.
    #[allow(clippy::too_many_lines)]
    pub fn new(bounds: Bounds, title: &str) -> Result<Self> {
        let event_loop = EventLoop::new().context("create event loop")?;
        let window = WindowBuilder::new()
            .with_title(title)
            .build(&event_loop)
            .context("failed to create window")?;

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(&window)?;
        // Safety: the surface lives as long as the window, and the window is
        // stored in the renderer and dropped after the surface.
        let surface =
            unsafe { std::mem::transmute::<wgpu::Surface<'_>, wgpu::Surface<'static>>(surface) };

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .context("failed to get adapter")?;
        tracing::info!("rendering on {}", adapter.get_info().name);

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("Renderer Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
            },
            None,
        ))
        .context("failed to request device")?;

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps.formats[0];
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: wgpu::CompositeAlphaMode::Auto,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        // Same vantage point the original scene opened with: far out on the
        // box diagonal, circling the box center.
        let camera = OrbitCamera::from_eye(
            bounds.center(),
            Vec3::splat(FAR / 3.0),
            config.width as f32 / config.height as f32,
        );

        let view_proj = camera.build_view_projection_matrix();
        let camera_uniform = CameraUniform {
            view_proj: view_proj.to_cols_array_2d(),
            view_proj_inv: view_proj.inverse().to_cols_array_2d(),
            eye: [camera.eye().x, camera.eye().y, camera.eye().z, 0.0],
        };
        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::bytes_of(&camera_uniform),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let light_dir = Vec3::ONE.normalize();
        let scene_uniform = SceneUniform::new(light_dir.to_array(), 0, bounds);
        let scene_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Scene Buffer"),
            contents: bytemuck::bytes_of(&scene_uniform),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let balls_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("balls"),
            size: 1024,
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("bind layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Storage { read_only: true },
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });

        let bind_group = create_bind_group(
            &device,
            &bind_group_layout,
            &camera_buffer,
            &scene_buffer,
            &balls_buffer,
        );

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("ball shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("renderer.wgsl").into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("ball pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_main",
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: (2 * std::mem::size_of::<f32>()) as wgpu::BufferAddress,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &wgpu::vertex_attr_array![0 => Float32x2],
                }],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        let quad: [[f32; 2]; 6] = [
            [-1.0, -1.0],
            [1.0, -1.0],
            [-1.0, 1.0],
            [-1.0, 1.0],
            [1.0, -1.0],
            [1.0, 1.0],
        ];
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad"),
            contents: bytemuck::cast_slice(&quad),
            usage: wgpu::BufferUsages::VERTEX,
        });

        Ok(Self {
            event_loop,
            surface,
            device,
            queue,
            config,
            pipeline,
            vertex_buffer,
            camera,
            camera_buffer,
            scene_buffer,
            balls_buffer,
            bind_group,
            bind_group_layout,
            window,
            bounds,
            light_dir,
            ball_count: 0,
            dragging: false,
        })
    }

    /// Pump window events and advance the orbit camera.
    ///
    /// Returns `false` once the window was asked to close.
    pub fn advance_controls(&mut self, dt: f32) -> bool {
        let mut exit = false;
        let status = self.event_loop.pump_events(Some(Duration::ZERO), |event, elwt| {
            match &event {
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::CloseRequested => {
                        exit = true;
                        elwt.exit();
                    }
                    WindowEvent::Resized(size) => {
                        if size.width > 0 && size.height > 0 {
                            self.config.width = size.width;
                            self.config.height = size.height;
                            self.surface.configure(&self.device, &self.config);
                            self.camera.resize(size.width, size.height);
                        }
                    }
                    WindowEvent::MouseInput { state, button, .. } => {
                        if *button == MouseButton::Left {
                            self.dragging = *state == ElementState::Pressed;
                        }
                    }
                    WindowEvent::MouseWheel { delta, .. } => {
                        let steps = match delta {
                            MouseScrollDelta::LineDelta(_, y) => *y,
                            MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 50.0,
                        };
                        self.camera.zoom(steps);
                    }
                    _ => {}
                },
                Event::DeviceEvent {
                    event: DeviceEvent::MouseMotion { delta },
                    ..
                } => {
                    if self.dragging {
                        self.camera.orbit(delta.0 as f32, delta.1 as f32);
                    }
                }
                _ => {}
            }
        });

        if matches!(status, PumpStatus::Exit(_)) || exit {
            return false;
        }

        self.camera.update(dt);
        self.window.request_redraw();
        true
    }

    /// Rotate the directional light about the world Y axis.
    pub fn rotate_light(&mut self, dt: f32) {
        self.light_dir = Quat::from_rotation_y(dt * LIGHT_ROTATE_RATE) * self.light_dir;
    }

    /// Upload the current ball state, growing the storage buffer as needed.
    pub fn update_scene(&mut self, balls: &[Ball]) {
        let ball_data: Vec<BallGpu> = balls.iter().map(BallGpu::from).collect();
        self.ball_count = u32::try_from(ball_data.len()).unwrap_or(u32::MAX);

        if ball_data.is_empty() {
            return;
        }
        let bytes = bytemuck::cast_slice(&ball_data);
        if self.balls_buffer.size() < bytes.len() as u64 {
            self.balls_buffer = self
                .device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("balls"),
                    contents: bytes,
                    usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
                });
            self.bind_group = create_bind_group(
                &self.device,
                &self.bind_group_layout,
                &self.camera_buffer,
                &self.scene_buffer,
                &self.balls_buffer,
            );
        } else {
            self.queue.write_buffer(&self.balls_buffer, 0, bytes);
        }
    }

    /// Draw one frame.
    ///
    /// # Errors
    ///
    /// Propagates surface acquisition failures that a reconfigure cannot
    /// recover from.
    pub fn render(&mut self) -> Result<()> {
        let view_proj = self.camera.build_view_projection_matrix();
        let eye = self.camera.eye();
        let camera_uniform = CameraUniform {
            view_proj: view_proj.to_cols_array_2d(),
            view_proj_inv: view_proj.inverse().to_cols_array_2d(),
            eye: [eye.x, eye.y, eye.z, 0.0],
        };
        self.queue
            .write_buffer(&self.camera_buffer, 0, bytemuck::bytes_of(&camera_uniform));

        let scene_uniform =
            SceneUniform::new(self.light_dir.to_array(), self.ball_count, self.bounds);
        self.queue
            .write_buffer(&self.scene_buffer, 0, bytemuck::bytes_of(&scene_uniform));

        let output = match self.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(e) => return Err(e).context("failed to acquire surface texture"),
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: Some("enc") });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("rpass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            rpass.draw(0..6, 0..1);
        }
        self.queue.submit(Some(encoder.finish()));
        output.present();
        Ok(())
    }
}

fn create_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    camera_buffer: &wgpu::Buffer,
    scene_buffer: &wgpu::Buffer,
    balls_buffer: &wgpu::Buffer,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("bind group"),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: scene_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: balls_buffer.as_entire_binding(),
            },
        ],
    })
}
