use crate::error::Result;
use crate::hooks::lifecycle::{AssetTagsHandler, EmitHandler, Phase};
use crate::host::{AssetTags, Compilation};

/// Registration surface a build host exposes to plugins.
///
/// Handlers run in registration order; the first error stops the phase and
/// is returned to the caller.
pub trait Hooks {
    fn tap_emit(&mut self, plugin: &'static str, handler: EmitHandler);

    fn tap_alter_asset_tags(&mut self, plugin: &'static str, handler: AssetTagsHandler);

    /// Plugin names registered for `phase`, in order
    fn tapped(&self, phase: Phase) -> Vec<&'static str>;

    /// Empty tag groups in the shape this host's templating step uses
    fn asset_tags(&self) -> AssetTags;

    fn emit(&self, compilation: &mut Compilation<'_>) -> Result<()>;

    fn alter_asset_tags(&self, tags: &mut AssetTags) -> Result<()>;
}

/// Which plugin interface the host speaks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HookStyle {
    #[default]
    Modern,
    Legacy,
}

impl HookStyle {
    pub fn hooks(self) -> Box<dyn Hooks> {
        match self {
            HookStyle::Modern => Box::new(ModernHooks::new()),
            HookStyle::Legacy => Box::new(LegacyHooks::new()),
        }
    }
}

struct HookSlot<H> {
    taps: Vec<(&'static str, H)>,
}

impl<H> HookSlot<H> {
    fn new() -> Self {
        HookSlot { taps: Vec::new() }
    }

    fn tap(&mut self, plugin: &'static str, handler: H) {
        self.taps.push((plugin, handler));
    }

    fn names(&self) -> Vec<&'static str> {
        self.taps.iter().map(|(name, _)| *name).collect()
    }
}

/// Hook-object interface: one typed slot per phase.
pub struct ModernHooks {
    emit: HookSlot<EmitHandler>,
    alter_asset_tags: HookSlot<AssetTagsHandler>,
}

impl ModernHooks {
    pub fn new() -> Self {
        ModernHooks {
            emit: HookSlot::new(),
            alter_asset_tags: HookSlot::new(),
        }
    }
}

impl Default for ModernHooks {
    fn default() -> Self {
        Self::new()
    }
}

impl Hooks for ModernHooks {
    fn tap_emit(&mut self, plugin: &'static str, handler: EmitHandler) {
        self.emit.tap(plugin, handler);
    }

    fn tap_alter_asset_tags(&mut self, plugin: &'static str, handler: AssetTagsHandler) {
        self.alter_asset_tags.tap(plugin, handler);
    }

    fn tapped(&self, phase: Phase) -> Vec<&'static str> {
        match phase {
            Phase::Emit => self.emit.names(),
            Phase::AlterAssetTags => self.alter_asset_tags.names(),
        }
    }

    fn asset_tags(&self) -> AssetTags {
        AssetTags::modern()
    }

    fn emit(&self, compilation: &mut Compilation<'_>) -> Result<()> {
        for (_, handler) in &self.emit.taps {
            handler(compilation)?;
        }
        Ok(())
    }

    fn alter_asset_tags(&self, tags: &mut AssetTags) -> Result<()> {
        for (_, handler) in &self.alter_asset_tags.taps {
            handler(tags)?;
        }
        Ok(())
    }
}

enum Callback {
    Emit(EmitHandler),
    AssetTags(AssetTagsHandler),
}

struct Registration {
    event: &'static str,
    plugin: &'static str,
    callback: Callback,
}

/// Callback interface: handlers keyed by event name strings.
pub struct LegacyHooks {
    registrations: Vec<Registration>,
}

impl LegacyHooks {
    pub fn new() -> Self {
        LegacyHooks {
            registrations: Vec::new(),
        }
    }

    fn plugin(&mut self, phase: Phase, plugin: &'static str, callback: Callback) {
        self.registrations.push(Registration {
            event: phase.legacy_event(),
            plugin,
            callback,
        });
    }

    fn registered(&self, phase: Phase) -> impl Iterator<Item = &Registration> {
        self.registrations
            .iter()
            .filter(move |r| r.event == phase.legacy_event())
    }
}

impl Default for LegacyHooks {
    fn default() -> Self {
        Self::new()
    }
}

impl Hooks for LegacyHooks {
    fn tap_emit(&mut self, plugin: &'static str, handler: EmitHandler) {
        self.plugin(Phase::Emit, plugin, Callback::Emit(handler));
    }

    fn tap_alter_asset_tags(&mut self, plugin: &'static str, handler: AssetTagsHandler) {
        self.plugin(Phase::AlterAssetTags, plugin, Callback::AssetTags(handler));
    }

    fn tapped(&self, phase: Phase) -> Vec<&'static str> {
        self.registered(phase).map(|r| r.plugin).collect()
    }

    fn asset_tags(&self) -> AssetTags {
        AssetTags::legacy()
    }

    fn emit(&self, compilation: &mut Compilation<'_>) -> Result<()> {
        for registration in self.registered(Phase::Emit) {
            if let Callback::Emit(handler) = &registration.callback {
                handler(compilation)?;
            }
        }
        Ok(())
    }

    fn alter_asset_tags(&self, tags: &mut AssetTags) -> Result<()> {
        for registration in self.registered(Phase::AlterAssetTags) {
            if let Callback::AssetTags(handler) = &registration.callback {
                handler(tags)?;
            }
        }
        Ok(())
    }
}
