pub use crate::animation::{AnimatedValue, AnimationSpec, Clock, Easing, Interpolate, ManualClock};
pub use crate::color::{Brush, Color, LinearGradient};
pub use crate::effects::Dispose;
pub use crate::error::{FolioError, Result};
pub use crate::geometry::{Rect, Size};
pub use crate::locals::{Theme, local, theme, with_local, with_theme};
pub use crate::modifier::{Modifier, PaddingValues};
pub use crate::scope::Scope;
pub use crate::semantics::{Role, Semantics};
pub use crate::signal::{Signal, signal};
pub use crate::timer::{TimerHandle, Timers};
pub use crate::view::{Callback, View, ViewId, ViewKind};
pub use taffy::{AlignItems, FlexWrap, JustifyContent};
