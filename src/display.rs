use crate::config::{Config, WINDOW_TITLE};
use crate::error::Result;
use pixels::{Pixels, SurfaceTexture};
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event_loop::EventLoop;
use winit::window::{Fullscreen, Window, WindowBuilder};

/// The window and the pixel buffer presented into it.
pub struct Display {
    // dropped before the window it draws into
    pixels: Pixels,
    window: Window,
    width: u32,
    height: u32,
}

impl Display {
    pub fn open(event_loop: &EventLoop<()>, config: &Config) -> Result<Self> {
        let mut builder = WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(config.window_width, config.window_height))
            .with_resizable(false);
        if config.fullscreen {
            builder = builder.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }
        let window = builder.build(event_loop)?;

        // the inner size may lag behind the fullscreen switch, the monitor does not
        let size = match window.current_monitor() {
            Some(monitor) if config.fullscreen => monitor.size(),
            _ => window.inner_size(),
        };
        log::info!("display surface {}x{}", size.width, size.height);

        let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
        let pixels = Pixels::new(size.width, size.height, surface_texture)?;

        Ok(Self {
            pixels,
            window,
            width: size.width,
            height: size.height,
        })
    }

    /// Buffer size in pixels. Fixed for the lifetime of the display.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn frame_mut(&mut self) -> &mut [u8] {
        self.pixels.frame_mut()
    }

    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }

    /// Rescales the buffer to a new window size; the buffer itself keeps its size.
    pub fn resize(&mut self, size: PhysicalSize<u32>) -> Result<()> {
        if size.width == 0 || size.height == 0 {
            return Ok(());
        }
        log::debug!("surface resized to {}x{}", size.width, size.height);
        self.pixels.resize_surface(size.width, size.height)?;
        Ok(())
    }

    pub fn present(&self) -> core::result::Result<(), pixels::Error> {
        self.pixels.render()
    }
}
