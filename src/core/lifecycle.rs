/// Renderer lifecycle: `Uninitialized -> Initializing -> Running -> Disposed`.
///
/// `Disposed` is terminal and reachable from every state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lifecycle {
    #[default]
    Uninitialized,
    Initializing,
    Running,
    Disposed,
}

impl Lifecycle {
    pub fn as_str(self) -> &'static str {
        match self {
            Lifecycle::Uninitialized => "uninitialized",
            Lifecycle::Initializing => "initializing",
            Lifecycle::Running => "running",
            Lifecycle::Disposed => "disposed",
        }
    }

    /// Enter `Initializing`. Only valid from `Uninitialized`.
    pub fn begin(&mut self) -> bool {
        if *self == Lifecycle::Uninitialized {
            *self = Lifecycle::Initializing;
            return true;
        }
        false
    }

    /// Enter `Running` once resources are ready. Fails if disposed meanwhile.
    pub fn mark_running(&mut self) -> bool {
        if *self == Lifecycle::Initializing {
            *self = Lifecycle::Running;
            return true;
        }
        false
    }

    /// Enter `Disposed`. Returns `true` only on the first call.
    pub fn dispose(&mut self) -> bool {
        if *self == Lifecycle::Disposed {
            return false;
        }
        *self = Lifecycle::Disposed;
        true
    }

    #[inline]
    pub fn is_live(self) -> bool {
        matches!(self, Lifecycle::Initializing | Lifecycle::Running)
    }
}
