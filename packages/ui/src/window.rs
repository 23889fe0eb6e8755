use dioxus::prelude::*;
use festival::motion::PointerOffset;
use festival::particles::{Viewport, DEFAULT_VIEWPORT};
use serde::Deserialize;

// Installs one listener per window event and streams them back over the eval channel.
const JS_WINDOW_LISTENERS: &str = r#"
(function(){
  const onScroll = () => dioxus.send({ kind: "scroll", y: window.scrollY });
  const onMove = (e) => dioxus.send({
    kind: "pointer",
    x: e.clientX,
    y: e.clientY,
    width: window.innerWidth,
    height: window.innerHeight,
  });
  const onResize = () => dioxus.send({
    kind: "resize",
    width: window.innerWidth,
    height: window.innerHeight,
  });
  window.addEventListener("scroll", onScroll, { passive: true });
  window.addEventListener("mousemove", onMove);
  window.addEventListener("resize", onResize);
  window.__festivalTeardown = () => {
    window.removeEventListener("scroll", onScroll);
    window.removeEventListener("mousemove", onMove);
    window.removeEventListener("resize", onResize);
  };
  onResize();
  onScroll();
})();
"#;

const JS_WINDOW_TEARDOWN: &str = r#"
(function(){
  try { if (window.__festivalTeardown) { window.__festivalTeardown(); } } catch(e) {}
  window.__festivalTeardown = undefined;
  return "";
})()
"#;

/// Message posted by the window listeners.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WindowEvent {
    Scroll { y: f64 },
    Pointer { x: f64, y: f64, width: f64, height: f64 },
    Resize { width: f64, height: f64 },
}

/// Latest scroll offset, pointer offset and window size.
#[derive(Clone, Copy, PartialEq)]
pub struct WindowSignals {
    pub scroll_y: Signal<f64>,
    pub pointer: Signal<PointerOffset>,
    pub viewport: Signal<Viewport>,
}

impl WindowSignals {
    fn apply(mut self, event: WindowEvent) {
        match event {
            WindowEvent::Scroll { y } => self.scroll_y.set(y),
            WindowEvent::Pointer {
                x,
                y,
                width,
                height,
            } => self
                .pointer
                .set(PointerOffset::from_client(x, y, width, height)),
            WindowEvent::Resize { width, height } => {
                self.viewport.set(Viewport { width, height })
            }
        }
    }
}

/// Provide [`WindowSignals`] to the tree and keep them fed from the browser window.
#[component]
pub fn WindowProvider(children: Element) -> Element {
    let scroll_y = use_signal(|| 0.0_f64);
    let pointer = use_signal(PointerOffset::default);
    let viewport = use_signal(|| DEFAULT_VIEWPORT);
    let signals = WindowSignals {
        scroll_y,
        pointer,
        viewport,
    };
    use_context_provider(|| signals);

    use_effect(move || {
        spawn(async move {
            let mut eval = document::eval(JS_WINDOW_LISTENERS);
            tracing::debug!("window: listeners installed");
            loop {
                match eval.recv::<WindowEvent>().await {
                    Ok(event) => signals.apply(event),
                    Err(err) => {
                        tracing::debug!("window: listener channel closed: {err:?}");
                        break;
                    }
                }
            }
        });
    });

    use_drop(|| {
        let _ = document::eval(JS_WINDOW_TEARDOWN);
    });

    rsx! { {children} }
}

pub fn use_window() -> WindowSignals {
    if let Some(signals) = try_use_context::<WindowSignals>() {
        return signals;
    }

    // Rendering outside the provider (SSR, isolated components): values stay at rest.
    tracing::debug!("window: missing WindowProvider context, using resting signals");
    WindowSignals {
        scroll_y: use_signal(|| 0.0_f64),
        pointer: use_signal(PointerOffset::default),
        viewport: use_signal(|| DEFAULT_VIEWPORT),
    }
}

pub fn use_scroll_y() -> Signal<f64> {
    use_window().scroll_y
}

pub fn use_pointer() -> Signal<PointerOffset> {
    use_window().pointer
}

pub fn use_viewport() -> Signal<Viewport> {
    use_window().viewport
}

/// Flips to `true` once the element with `element_id` is at least 10% visible.
pub fn use_in_view(element_id: String) -> Signal<bool> {
    let mut visible = use_signal(|| false);
    use_effect(move || {
        let script = in_view_script(&element_id);
        spawn(async move {
            let mut eval = document::eval(&script);
            match eval.recv::<bool>().await {
                Ok(seen) => visible.set(seen),
                Err(err) => tracing::debug!("in_view: observer unavailable: {err:?}"),
            }
        });
    });
    visible
}

fn in_view_script(element_id: &str) -> String {
    format!(
        r#"
(function(){{
  const el = document.getElementById("{element_id}");
  if (!el || !("IntersectionObserver" in window)) {{ dioxus.send(true); return; }}
  const observer = new IntersectionObserver((entries) => {{
    if (entries.some((entry) => entry.isIntersecting)) {{
      observer.disconnect();
      dioxus.send(true);
    }}
  }}, {{ threshold: 0.1 }});
  observer.observe(el);
}})();
"#
    )
}
