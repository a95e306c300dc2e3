use desktop_runtime::{
    reduce_desktop, DesktopAction, DesktopState, InteractionState, PointerPosition, ReducerError,
    ResizeEdge, RuntimeEffect, Viewport, WindowKind,
};
use pretty_assertions::assert_eq;

const DESKTOP: Viewport = Viewport {
    width: 1280,
    height: 800,
};
const PHONE: Viewport = Viewport {
    width: 390,
    height: 844,
};

struct Desktop {
    state: DesktopState,
    interaction: InteractionState,
}

impl Desktop {
    fn boot(viewport: Viewport) -> Self {
        let mut desktop = Self {
            state: DesktopState::default(),
            interaction: InteractionState::default(),
        };
        desktop
            .apply(DesktopAction::Boot { viewport })
            .expect("boot");
        desktop
    }

    fn apply(&mut self, action: DesktopAction) -> Result<Vec<RuntimeEffect>, ReducerError> {
        reduce_desktop(&mut self.state, &mut self.interaction, action)
    }

    fn assert_mount_invariant(&self) {
        for window in self.state.windows.windows() {
            if !window.is_mounted() {
                assert!(!window.is_visible(), "{:?} visible while unmounted", window.kind());
                assert!(!window.is_maximized(), "{:?} maximized while unmounted", window.kind());
            }
        }
    }

    fn top_z(&self) -> u32 {
        self.state
            .windows
            .windows()
            .map(|window| window.z_index())
            .max()
            .unwrap_or_default()
    }
}

fn pointer(x: i32, y: i32) -> PointerPosition {
    PointerPosition { x, y }
}

#[test]
fn unmounted_windows_are_never_visible_or_maximized() {
    let mut desktop = Desktop::boot(DESKTOP);
    let script = [
        DesktopAction::OpenWindow {
            kind: WindowKind::Terminal,
        },
        DesktopAction::ToggleMaximize {
            kind: WindowKind::Terminal,
        },
        DesktopAction::CloseWindow {
            kind: WindowKind::Terminal,
        },
        DesktopAction::MinimizeWindow {
            kind: WindowKind::Resume,
        },
        DesktopAction::ToggleMaximize {
            kind: WindowKind::Resume,
        },
        DesktopAction::OpenWindow {
            kind: WindowKind::Resume,
        },
        DesktopAction::MinimizeWindow {
            kind: WindowKind::Resume,
        },
        DesktopAction::ViewportChanged { viewport: PHONE },
        DesktopAction::CloseWindow {
            kind: WindowKind::Browser,
        },
        DesktopAction::ViewportChanged { viewport: DESKTOP },
    ];
    for action in script {
        let _ = desktop.apply(action);
        desktop.assert_mount_invariant();
    }
}

#[test]
fn each_focus_takes_the_next_counter_value() {
    let mut desktop = Desktop::boot(DESKTOP);
    desktop
        .apply(DesktopAction::OpenWindow {
            kind: WindowKind::Terminal,
        })
        .expect("open terminal");

    let before = desktop.top_z();
    desktop
        .apply(DesktopAction::FocusWindow {
            kind: WindowKind::Browser,
        })
        .expect("focus browser");
    assert_eq!(desktop.state.windows.window(WindowKind::Browser).z_index(), before + 1);

    desktop
        .apply(DesktopAction::FocusWindow {
            kind: WindowKind::Browser,
        })
        .expect("focus browser again");
    assert_eq!(desktop.state.windows.window(WindowKind::Browser).z_index(), before + 2);
}

#[test]
fn focusing_an_unmounted_window_is_rejected_without_change() {
    let mut desktop = Desktop::boot(DESKTOP);
    let before = desktop.state.clone();
    assert_eq!(
        desktop.apply(DesktopAction::FocusWindow {
            kind: WindowKind::Resume,
        }),
        Err(ReducerError::WindowNotMounted(WindowKind::Resume))
    );
    assert_eq!(desktop.state, before);
}

#[test]
fn drag_keeps_the_window_inside_the_viewport() {
    let mut desktop = Desktop::boot(DESKTOP);
    let kind = WindowKind::Browser;
    desktop
        .apply(DesktopAction::BeginMove {
            kind,
            pointer: pointer(400, 130),
        })
        .expect("begin move");

    for target in [pointer(-4000, -4000), pointer(9000, 9000), pointer(420, 150)] {
        desktop
            .apply(DesktopAction::PointerMove {
                kind,
                pointer: target,
            })
            .expect("move");
        let rect = desktop.state.windows.window(kind).rect();
        assert!(rect.x >= 0 && rect.x <= DESKTOP.width - rect.w, "x out of bounds: {rect:?}");
        assert!(rect.y >= 0 && rect.y <= DESKTOP.height - rect.h, "y out of bounds: {rect:?}");
    }
    let rect = desktop.state.windows.window(kind).rect();
    assert_eq!((rect.x, rect.y), (210, 140));
}

#[test]
fn resize_never_shrinks_below_the_floor() {
    let mut desktop = Desktop::boot(DESKTOP);
    let kind = WindowKind::Browser;
    let floor = desktop.state.catalog.window(kind).min_size();
    desktop
        .apply(DesktopAction::BeginResize {
            kind,
            edge: ResizeEdge::NorthWest,
            pointer: pointer(190, 120),
        })
        .expect("begin resize");
    desktop
        .apply(DesktopAction::PointerMove {
            kind,
            pointer: pointer(1200, 790),
        })
        .expect("resize");

    let rect = desktop.state.windows.window(kind).rect();
    assert_eq!((rect.w, rect.h), (floor.w, floor.h));
    assert!(rect.x + rect.w <= DESKTOP.width);
    assert!(rect.y + rect.h <= DESKTOP.height);
}

#[test]
fn pointer_up_restores_transitions_on_the_next_tick() {
    let mut desktop = Desktop::boot(DESKTOP);
    let kind = WindowKind::Browser;
    desktop
        .apply(DesktopAction::BeginMove {
            kind,
            pointer: pointer(300, 130),
        })
        .expect("begin move");
    assert!(!desktop.interaction.transitions_enabled(kind));

    let effects = desktop
        .apply(DesktopAction::PointerUp { kind })
        .expect("pointer up");
    assert_eq!(
        effects,
        vec![
            RuntimeEffect::DetachPointerListeners(kind),
            RuntimeEffect::EnableTransitionsNextTick(kind),
        ]
    );
    assert!(!desktop.interaction.transitions_enabled(kind));
    desktop
        .apply(DesktopAction::EnableTransitions { kind })
        .expect("enable transitions");
    assert!(desktop.interaction.transitions_enabled(kind));
}

#[test]
fn shrinking_to_mobile_forces_browser_maximized_and_closes_others() {
    let mut desktop = Desktop::boot(DESKTOP);
    desktop
        .apply(DesktopAction::OpenWindow {
            kind: WindowKind::Terminal,
        })
        .expect("open terminal");
    desktop
        .apply(DesktopAction::OpenWindow {
            kind: WindowKind::Resume,
        })
        .expect("open resume");

    desktop
        .apply(DesktopAction::ViewportChanged { viewport: PHONE })
        .expect("viewport change");

    let windows = &desktop.state.windows;
    let browser = windows.window(WindowKind::Browser);
    assert!(browser.is_mounted() && browser.is_visible() && browser.is_maximized());
    assert!(!windows.window(WindowKind::Terminal).is_mounted());
    assert!(!windows.window(WindowKind::Resume).is_mounted());
    assert!(!desktop.state.desktop_chrome_visible());
}

#[test]
fn growing_back_to_desktop_recenters_the_browser() {
    let mut desktop = Desktop::boot(PHONE);
    desktop
        .apply(DesktopAction::ViewportChanged { viewport: DESKTOP })
        .expect("viewport change");

    let browser = desktop.state.windows.window(WindowKind::Browser);
    assert!(browser.is_visible());
    assert!(!browser.is_maximized());
    let rect = browser.rect();
    assert_eq!((rect.x, rect.y), (190, 120));
    assert_eq!(browser.z_index(), desktop.top_z());
    assert!(desktop.state.desktop_chrome_visible());
}

#[test]
fn resizing_within_a_class_keeps_the_layout() {
    let mut desktop = Desktop::boot(DESKTOP);
    desktop
        .apply(DesktopAction::OpenWindow {
            kind: WindowKind::Terminal,
        })
        .expect("open terminal");
    desktop
        .apply(DesktopAction::ViewportChanged {
            viewport: Viewport {
                width: 1024,
                height: 700,
            },
        })
        .expect("viewport change");
    assert!(desktop
        .state
        .windows
        .window(WindowKind::Terminal)
        .is_mounted());
}

#[test]
fn minimize_is_ignored_on_mobile() {
    let mut desktop = Desktop::boot(PHONE);
    desktop
        .apply(DesktopAction::MinimizeWindow {
            kind: WindowKind::Browser,
        })
        .expect("minimize");
    assert!(desktop.state.windows.window(WindowKind::Browser).is_visible());
    let controls = desktop.state.windows.controls(WindowKind::Browser);
    assert!(!controls.minimize && !controls.maximize && controls.close);
}
