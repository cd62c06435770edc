//! Wiring between hosts, backends and the screen

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{anyhow, Context, Result};
use vista_platform::{
    ControlFlow, Event, Host, LifecycleEvent, PlatformError, PlatformOs, ViewportDimensions,
    Window, WindowConfig, WindowEvent,
};
use vista_screen::view::format_units;
use vista_screen::Screen;

/// Parse a `WIDTHxHEIGHT` size such as `375x812` or `412.5x915`
pub fn parse_size(s: &str) -> Result<ViewportDimensions> {
    let (width, height) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| anyhow!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let width: f64 = width
        .trim()
        .parse()
        .with_context(|| format!("invalid width in '{s}'"))?;
    let height: f64 = height
        .trim()
        .parse()
        .with_context(|| format!("invalid height in '{s}'"))?;
    if !(width.is_finite() && height.is_finite()) || width < 0.0 || height < 0.0 {
        anyhow::bail!("size must be finite and non-negative, got '{s}'");
    }
    Ok(ViewportDimensions::new(width, height))
}

/// Window title showing the live viewport size
pub fn window_title(base: &str, dimensions: ViewportDimensions) -> String {
    format!(
        "{} ({}x{})",
        base,
        format_units(dimensions.width),
        format_units(dimensions.height)
    )
}

/// Mount a screen against an in-process host, replay size changes, and
/// return the final rendered text
pub fn render_headless(
    platform: PlatformOs,
    initial: ViewportDimensions,
    changes: &[ViewportDimensions],
) -> Result<String> {
    let host = Host::new(platform, initial);
    let screen = Screen::mount(host.clone()).context("Failed to activate screen")?;

    for change in changes {
        host.dimensions_channel().set(*change);
    }

    let node = screen
        .render()
        .ok_or_else(|| anyhow!("screen is not active"))?;
    Ok(node.to_text())
}

/// Keeps a screen in sync with one window
///
/// Backend events go in through [`WindowSession::handle_event`]. Viewport
/// changes are published on the host's dimension channel. Each re-render
/// is applied to the window as a title update and a redraw request.
pub struct WindowSession {
    host: Host,
    base_title: String,
    pending_title: Rc<RefCell<Option<String>>>,
    screen: Option<Screen<Host>>,
}

impl WindowSession {
    pub fn new(platform: PlatformOs, config: &WindowConfig) -> Self {
        Self {
            host: Host::new(
                platform,
                (config.width as f64, config.height as f64).into(),
            ),
            base_title: config.title.clone(),
            pending_title: Rc::new(RefCell::new(None)),
            screen: None,
        }
    }

    pub fn host(&self) -> &Host {
        &self.host
    }

    /// The mounted screen, once the window has resumed
    pub fn screen(&self) -> Option<&Screen<Host>> {
        self.screen.as_ref()
    }

    /// Handle one backend event
    ///
    /// Fails only if the screen cannot subscribe to the host.
    pub fn handle_event<W: Window>(
        &mut self,
        event: Event,
        window: &W,
    ) -> Result<ControlFlow, PlatformError> {
        match event {
            Event::Lifecycle(LifecycleEvent::Resumed) => {
                self.host.dimensions_channel().set(window.viewport());
                if self.screen.is_none() {
                    self.screen = Some(self.mount()?);
                }
            }

            Event::Window(WindowEvent::CloseRequested) => {
                if let Some(mut screen) = self.screen.take() {
                    screen.deactivate();
                }
                return Ok(ControlFlow::Exit);
            }

            Event::Window(ref change) if change.affects_viewport() => {
                self.host.dimensions_channel().set(window.viewport());
            }

            _ => {}
        }

        if let Some(title) = self.pending_title.borrow_mut().take() {
            window.set_title(&title);
            window.request_redraw();
        }
        Ok(ControlFlow::Continue)
    }

    fn mount(&self) -> Result<Screen<Host>, PlatformError> {
        let mut screen = Screen::new(self.host.clone());
        let titles = Rc::clone(&self.pending_title);
        let base = self.base_title.clone();
        let channel = self.host.dimensions_channel().clone();
        screen.on_update(move |node| {
            tracing::info!("render:\n{}", node.to_text());
            *titles.borrow_mut() = Some(window_title(&base, channel.get()));
        });
        screen.activate()?;
        Ok(screen)
    }
}

#[cfg(not(any(target_os = "android", target_os = "ios")))]
pub use desktop::run_desktop;

#[cfg(not(any(target_os = "android", target_os = "ios")))]
mod desktop {
    use std::cell::RefCell;
    use std::rc::Rc;

    use anyhow::{Context, Result};
    use vista_platform::{ControlFlow, EventLoop, Platform, PlatformError, PlatformOs, WindowConfig};
    use vista_platform_desktop::DesktopPlatform;

    use super::WindowSession;

    /// Open a window and keep the screen in sync with it until closed
    pub fn run_desktop(config: WindowConfig, platform: PlatformOs) -> Result<()> {
        let backend = DesktopPlatform::new().context("Failed to initialize desktop platform")?;
        let event_loop = backend
            .create_event_loop(config.clone())
            .context("Failed to create event loop")?;

        let mut session = WindowSession::new(platform, &config);
        let failure: Rc<RefCell<Option<PlatformError>>> = Rc::new(RefCell::new(None));

        tracing::info!(%platform, "starting desktop window");

        let loop_failure = Rc::clone(&failure);
        event_loop.run(move |event, window| match session.handle_event(event, window) {
            Ok(flow) => flow,
            Err(err) => {
                tracing::error!("Failed to activate screen: {}", err);
                *loop_failure.borrow_mut() = Some(err);
                ControlFlow::Exit
            }
        })?;

        let failure = failure.borrow_mut().take();
        match failure {
            Some(err) => Err(err).context("Screen failed to start"),
            None => Ok(()),
        }
    }
}
