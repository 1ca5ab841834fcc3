//! # Theming and locals
//!
//! Folio uses thread‑local “composition locals” for values that a whole
//! subtree reads but nobody wants to thread through every function: the
//! color `Theme`, or any other `Clone` type a caller provides with
//! `with_local`.
//!
//! ```rust
//! use folio_core::*;
//!
//! let light = Theme {
//!     background: Color::WHITE,
//!     on_surface: Color::from_hex("#222222"),
//!     ..Theme::default()
//! };
//!
//! with_theme(light, || {
//!     assert_eq!(theme().background, Color::WHITE);
//! });
//! assert_ne!(theme().background, Color::WHITE);
//! ```

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;

use crate::Color;

thread_local! {
    static LOCALS_STACK: RefCell<Vec<HashMap<TypeId, Box<dyn Any>>>> = RefCell::new(Vec::new());
}

fn with_locals_frame<R>(f: impl FnOnce() -> R) -> R {
    // Non-panicking frame guard (ensures pop on unwind)
    struct Guard;
    impl Drop for Guard {
        fn drop(&mut self) {
            LOCALS_STACK.with(|st| {
                st.borrow_mut().pop();
            });
        }
    }
    LOCALS_STACK.with(|st| st.borrow_mut().push(HashMap::new()));
    let _guard = Guard;
    f()
}

fn set_local_boxed(t: TypeId, v: Box<dyn Any>) {
    LOCALS_STACK.with(|st| {
        if let Some(top) = st.borrow_mut().last_mut() {
            top.insert(t, v);
        }
    });
}

/// Provides `value` to everything composed inside `f`.
pub fn with_local<T: Clone + 'static, R>(value: T, f: impl FnOnce() -> R) -> R {
    with_locals_frame(|| {
        set_local_boxed(TypeId::of::<T>(), Box::new(value));
        f()
    })
}

/// Innermost provided value of type `T`, if any.
pub fn local<T: Clone + 'static>() -> Option<T> {
    LOCALS_STACK.with(|st| {
        for frame in st.borrow().iter().rev() {
            if let Some(v) = frame.get(&TypeId::of::<T>())
                && let Some(t) = v.downcast_ref::<T>()
            {
                return Some(t.clone());
            }
        }
        None
    })
}

/// Color theme used by widgets and renderers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    /// Window background / app root.
    pub background: Color,
    /// Cards, nav bar, panels.
    pub surface: Color,
    /// Primary foreground color on top of `surface`/`background`.
    pub on_surface: Color,
    /// Low-emphasis text (dates, captions).
    pub muted: Color,

    /// Accent for active nav items, filter buttons, tags.
    pub primary: Color,
    /// Second stop of accent gradients.
    pub secondary: Color,
    pub on_primary: Color,

    pub outline: Color,
    /// Featured-project badge.
    pub highlight: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::from_hex("#0A0A0F"),
            surface: Color::from_hex("#1A1A2ECC"),
            on_surface: Color::from_hex("#E6E6E6"),
            muted: Color::from_hex("#888888"),
            primary: Color::from_hex("#00FFFF"),
            secondary: Color::from_hex("#0096FF"),
            on_primary: Color::BLACK,
            outline: Color::from_hex("#00FFFF33"),
            highlight: Color::from_hex("#FFD700"),
        }
    }
}

pub fn with_theme<R>(theme: Theme, f: impl FnOnce() -> R) -> R {
    with_local(theme, f)
}

pub fn theme() -> Theme {
    local::<Theme>().unwrap_or_default()
}
