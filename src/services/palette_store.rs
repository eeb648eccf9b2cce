//! Palette state store.
//!
//! Owns the live slots, the display format, the selected harmony rule and the
//! saved palettes. Every change goes through one of the mutation methods; a
//! rejected call returns an error and leaves the store untouched.

use chrono::Local;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;
use tracing::{debug, info};

use crate::config::PaletteConfig;
use crate::error::PaletteError;
use crate::models::{ColorFormat, ColorSlot, HarmonyRule, HexColor, PaletteId, SavedPalette};

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, PaletteError>;

/// Change notification sent to subscribers after a successful mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// Unlocked slots were resampled
    Generated {
        /// Indices of the slots that received new colors
        changed: Vec<usize>,
    },
    /// A slot's lock flag flipped
    LockToggled {
        /// Slot index
        index: usize,
        /// New lock state
        locked: bool,
    },
    /// A slot was edited manually
    ColorSet {
        /// Slot index
        index: usize,
        /// New value
        value: HexColor,
    },
    /// The live palette was snapshotted
    PaletteSaved(PaletteId),
    /// A saved palette replaced the live slots
    PaletteLoaded(PaletteId),
    /// A saved palette was removed
    PaletteDeleted(PaletteId),
    /// Display format changed
    FormatChanged(ColorFormat),
    /// Harmony rule changed
    HarmonyRuleChanged(HarmonyRule),
}

/// Handle returned by [`PaletteStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&StoreEvent)>;

/// The single owner of palette state.
pub struct PaletteStore {
    slots: Vec<ColorSlot>,
    format: ColorFormat,
    harmony_rule: HarmonyRule,
    saved: Vec<SavedPalette>,
    next_palette_id: u64,
    rng: StdRng,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl PaletteStore {
    /// Creates a store with the given starting colors, seeded from the OS.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::EmptyPalette`] when `colors` is empty.
    pub fn new(colors: Vec<HexColor>) -> StoreResult<Self> {
        Self::with_rng(colors, StdRng::from_os_rng())
    }

    /// Creates a store whose random sampling is reproducible.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazypalette::models::HexColor;
    /// use lazypalette::services::PaletteStore;
    ///
    /// let colors = vec![HexColor::parse("#FF5733").unwrap(); 3];
    /// let mut a = PaletteStore::with_seed(colors.clone(), 9).unwrap();
    /// let mut b = PaletteStore::with_seed(colors, 9).unwrap();
    /// a.generate();
    /// b.generate();
    /// assert_eq!(a.colors(), b.colors());
    /// ```
    pub fn with_seed(colors: Vec<HexColor>, seed: u64) -> StoreResult<Self> {
        Self::with_rng(colors, StdRng::seed_from_u64(seed))
    }

    /// Creates a store from the `[palette]` configuration section.
    ///
    /// Configured colors fill the first slots; any remaining slots are
    /// sampled at random. Extra configured colors are ignored.
    pub fn from_config(config: &PaletteConfig) -> StoreResult<Self> {
        if config.slot_count == 0 {
            return Err(PaletteError::EmptyPalette);
        }

        let mut rng = StdRng::from_os_rng();
        let mut colors = Vec::with_capacity(config.slot_count);
        for text in config.initial_colors.iter().take(config.slot_count) {
            colors.push(HexColor::parse(text)?);
        }
        while colors.len() < config.slot_count {
            colors.push(HexColor::random(&mut rng));
        }

        Self::with_rng(colors, rng)
    }

    fn with_rng(colors: Vec<HexColor>, rng: StdRng) -> StoreResult<Self> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }

        Ok(Self {
            slots: colors.into_iter().map(ColorSlot::new).collect(),
            format: ColorFormat::default(),
            harmony_rule: HarmonyRule::default(),
            saved: Vec::new(),
            next_palette_id: 1,
            rng,
            listeners: Vec::new(),
            next_subscription: 0,
        })
    }

    // === Queries ===

    /// Live slots in order.
    #[must_use]
    pub fn slots(&self) -> &[ColorSlot] {
        &self.slots
    }

    /// Slot at `index`.
    pub fn slot(&self, index: usize) -> StoreResult<&ColorSlot> {
        self.slots.get(index).ok_or(PaletteError::IndexOutOfRange {
            index,
            len: self.slots.len(),
        })
    }

    /// Number of live slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always false; a store never has zero slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Live colors without lock state.
    #[must_use]
    pub fn colors(&self) -> Vec<HexColor> {
        self.slots.iter().map(|slot| slot.value.clone()).collect()
    }

    /// Active display format.
    #[must_use]
    pub const fn format(&self) -> ColorFormat {
        self.format
    }

    /// Selected harmony rule.
    #[must_use]
    pub const fn harmony_rule(&self) -> HarmonyRule {
        self.harmony_rule
    }

    /// Saved palettes in the order they were saved.
    #[must_use]
    pub fn saved(&self) -> &[SavedPalette] {
        &self.saved
    }

    /// Saved palette with the given id.
    pub fn saved_palette(&self, id: PaletteId) -> StoreResult<&SavedPalette> {
        self.saved
            .iter()
            .find(|palette| palette.id == id)
            .ok_or(PaletteError::NotFound(id))
    }

    /// Slot color rendered in the active format.
    ///
    /// This is both the on-screen code and the clipboard text.
    pub fn formatted_color(&self, index: usize) -> StoreResult<String> {
        Ok(self.slot(index)?.value.to_format(self.format))
    }

    // === Mutations ===

    /// Resamples every unlocked slot; locked slots keep their values.
    ///
    /// The selected harmony rule is not consulted.
    pub fn generate(&mut self) {
        let mut changed = Vec::new();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if !slot.locked {
                slot.value = HexColor::random(&mut self.rng);
                changed.push(index);
            }
        }

        debug!(
            unlocked = changed.len(),
            locked = self.slots.len() - changed.len(),
            rule = %self.harmony_rule,
            "Generated palette"
        );
        self.emit(&StoreEvent::Generated { changed });
    }

    /// Flips the lock on a slot and returns the new state.
    pub fn toggle_lock(&mut self, index: usize) -> StoreResult<bool> {
        let len = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(PaletteError::IndexOutOfRange { index, len })?;

        slot.locked = !slot.locked;
        let locked = slot.locked;

        debug!(index, locked, "Toggled slot lock");
        self.emit(&StoreEvent::LockToggled { index, locked });
        Ok(locked)
    }

    /// Overwrites a slot with a manually entered color.
    ///
    /// Locked slots are overwritten too; the lock only guards against
    /// regeneration.
    pub fn set_color(&mut self, index: usize, value: &str) -> StoreResult<()> {
        let len = self.slots.len();
        if index >= len {
            return Err(PaletteError::IndexOutOfRange { index, len });
        }
        let value = HexColor::parse(value)?;

        self.slots[index].value = value.clone();

        debug!(index, value = %value, "Set slot color");
        self.emit(&StoreEvent::ColorSet { index, value });
        Ok(())
    }

    /// Snapshots the live colors under the next id and a default name.
    pub fn save_palette(&mut self) -> PaletteId {
        self.save_palette_named("")
    }

    /// Snapshots the live colors under the next id.
    ///
    /// A blank `name` falls back to `Palette <id>`.
    pub fn save_palette_named(&mut self, name: &str) -> PaletteId {
        let id = PaletteId::new(self.next_palette_id);
        self.next_palette_id += 1;

        let name = match name.trim() {
            "" => SavedPalette::default_name(id),
            trimmed => trimmed.to_string(),
        };

        info!(%id, name = %name, colors = self.slots.len(), "Saved palette");
        self.saved.push(SavedPalette {
            id,
            name,
            colors: self.colors(),
            created_at: Local::now(),
        });
        self.emit(&StoreEvent::PaletteSaved(id));
        id
    }

    /// Replaces the live slots with a saved palette's colors, all unlocked.
    pub fn load_palette(&mut self, id: PaletteId) -> StoreResult<()> {
        let colors = self.saved_palette(id)?.colors.clone();
        self.slots = colors.into_iter().map(ColorSlot::new).collect();

        info!(%id, "Loaded palette");
        self.emit(&StoreEvent::PaletteLoaded(id));
        Ok(())
    }

    /// Removes a saved palette and returns it.
    pub fn delete_palette(&mut self, id: PaletteId) -> StoreResult<SavedPalette> {
        let position = self
            .saved
            .iter()
            .position(|palette| palette.id == id)
            .ok_or(PaletteError::NotFound(id))?;
        let removed = self.saved.remove(position);

        info!(%id, "Deleted palette");
        self.emit(&StoreEvent::PaletteDeleted(id));
        Ok(removed)
    }

    /// Changes the display format.
    pub fn set_format(&mut self, format: ColorFormat) {
        self.format = format;
        debug!(%format, "Set display format");
        self.emit(&StoreEvent::FormatChanged(format));
    }

    /// Changes the selected harmony rule.
    pub fn set_harmony_rule(&mut self, rule: HarmonyRule) {
        self.harmony_rule = rule;
        debug!(%rule, "Set harmony rule");
        self.emit(&StoreEvent::HarmonyRuleChanged(rule));
    }

    // === Observers ===

    /// Registers a listener called after every successful mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn emit(&mut self, event: &StoreEvent) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }
}

impl fmt::Debug for PaletteStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaletteStore")
            .field("slots", &self.slots)
            .field("format", &self.format)
            .field("harmony_rule", &self.harmony_rule)
            .field("saved", &self.saved)
            .field("next_palette_id", &self.next_palette_id)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn hex(text: &str) -> HexColor {
        HexColor::parse(text).unwrap()
    }

    fn sample_store() -> PaletteStore {
        PaletteStore::with_seed(
            vec![
                hex("#FF5733"),
                hex("#33FF57"),
                hex("#3357FF"),
                hex("#F3FF33"),
                hex("#FF33F3"),
            ],
            1234,
        )
        .unwrap()
    }

    fn recorder(store: &mut PaletteStore) -> Rc<RefCell<Vec<StoreEvent>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        store.subscribe(move |event| sink.borrow_mut().push(event.clone()));
        events
    }

    #[test]
    fn test_empty_palette_is_rejected() {
        assert_eq!(
            PaletteStore::with_seed(Vec::new(), 0).unwrap_err(),
            PaletteError::EmptyPalette
        );
    }

    #[test]
    fn test_generate_keeps_locked_slot() {
        let mut store = sample_store();
        store.toggle_lock(1).unwrap();

        for _ in 0..50 {
            store.generate();
            assert_eq!(store.slots()[1].value.as_str(), "#33FF57");
        }
        // Sampled values are lowercase, so unlocked slots no longer match the
        // uppercase originals.
        assert_ne!(store.slots()[0].value.as_str(), "#FF5733");
    }

    #[test]
    fn test_generate_with_all_locked_changes_nothing() {
        let mut store = sample_store();
        for i in 0..store.len() {
            store.toggle_lock(i).unwrap();
        }
        let before = store.colors();
        store.generate();
        assert_eq!(store.colors(), before);
    }

    #[test]
    fn test_generate_ignores_harmony_rule() {
        let colors = sample_store().colors();
        let mut a = PaletteStore::with_seed(colors.clone(), 77).unwrap();
        let mut b = PaletteStore::with_seed(colors, 77).unwrap();
        a.set_harmony_rule(HarmonyRule::Complementary);
        b.set_harmony_rule(HarmonyRule::Monochromatic);

        a.generate();
        b.generate();
        assert_eq!(a.colors(), b.colors());
    }

    #[test]
    fn test_toggle_lock_out_of_range() {
        let mut store = sample_store();
        assert_eq!(
            store.toggle_lock(5),
            Err(PaletteError::IndexOutOfRange { index: 5, len: 5 })
        );
        assert!(store.slots().iter().all(|slot| !slot.locked));
    }

    #[test]
    fn test_toggle_lock_flips_back() {
        let mut store = sample_store();
        assert_eq!(store.toggle_lock(2), Ok(true));
        assert_eq!(store.toggle_lock(2), Ok(false));
    }

    #[test]
    fn test_set_color_overrides_locked_slot() {
        let mut store = sample_store();
        store.toggle_lock(0).unwrap();
        store.set_color(0, "#ABCDEF").unwrap();
        assert_eq!(store.slots()[0].value.as_str(), "#ABCDEF");
        assert!(store.slots()[0].locked);
    }

    #[test]
    fn test_set_color_rejects_invalid_without_side_effects() {
        let mut store = sample_store();
        let events = recorder(&mut store);
        let before = store.colors();

        assert!(matches!(
            store.set_color(0, "#GGGGGG"),
            Err(PaletteError::InvalidColor(_))
        ));
        assert!(matches!(
            store.set_color(9, "#000000"),
            Err(PaletteError::IndexOutOfRange { index: 9, .. })
        ));

        assert_eq!(store.colors(), before);
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_save_then_load_restores_values_unlocked() {
        let mut store = sample_store();
        store.toggle_lock(0).unwrap();
        store.toggle_lock(3).unwrap();
        let saved_colors = store.colors();
        let id = store.save_palette();

        store.generate();
        store.set_color(0, "#000000").unwrap();
        store.load_palette(id).unwrap();

        assert_eq!(store.colors(), saved_colors);
        assert!(store.slots().iter().all(|slot| !slot.locked));
    }

    #[test]
    fn test_saved_snapshot_is_independent_of_live_palette() {
        let mut store = sample_store();
        let id = store.save_palette();
        store.set_color(0, "#000000").unwrap();

        let saved = store.saved_palette(id).unwrap();
        assert_eq!(saved.colors[0].as_str(), "#FF5733");
        assert_eq!(saved.name, "Palette 1");
    }

    #[test]
    fn test_load_unknown_palette() {
        let mut store = sample_store();
        let before = store.colors();
        assert_eq!(
            store.load_palette(PaletteId::new(99)),
            Err(PaletteError::NotFound(PaletteId::new(99)))
        );
        assert_eq!(store.colors(), before);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut store = sample_store();
        let first = store.save_palette();
        store.generate();
        let second = store.save_palette_named("Second");
        store.generate();
        let third = store.save_palette();

        let kept: Vec<SavedPalette> = store
            .saved()
            .iter()
            .filter(|p| p.id != second)
            .cloned()
            .collect();

        let removed = store.delete_palette(second).unwrap();
        assert_eq!(removed.name, "Second");
        assert_eq!(store.saved(), kept.as_slice());
        assert_eq!(store.saved()[0].id, first);
        assert_eq!(store.saved()[1].id, third);
    }

    #[test]
    fn test_delete_unknown_palette() {
        let mut store = sample_store();
        store.save_palette();
        assert_eq!(
            store.delete_palette(PaletteId::new(2)),
            Err(PaletteError::NotFound(PaletteId::new(2)))
        );
        assert_eq!(store.saved().len(), 1);
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut store = sample_store();
        let a = store.save_palette();
        let b = store.save_palette();
        store.delete_palette(b).unwrap();
        store.delete_palette(a).unwrap();
        let c = store.save_palette();
        assert_eq!(c, PaletteId::new(3));
        assert_eq!(store.saved()[0].name, "Palette 3");
    }

    #[test]
    fn test_blank_name_falls_back_to_default() {
        let mut store = sample_store();
        let id = store.save_palette_named("   ");
        assert_eq!(store.saved_palette(id).unwrap().name, "Palette 1");
    }

    #[test]
    fn test_formatted_color_follows_active_format() {
        let mut store = sample_store();
        assert_eq!(store.formatted_color(0).unwrap(), "#FF5733");
        store.set_format(ColorFormat::Rgb);
        assert_eq!(store.formatted_color(0).unwrap(), "rgb(255, 87, 51)");
        store.set_format(ColorFormat::Hsl);
        assert_eq!(store.formatted_color(0).unwrap(), "hsl(11, 100%, 60%)");
        assert!(store.formatted_color(5).is_err());
    }

    #[test]
    fn test_one_event_per_successful_mutation() {
        let mut store = sample_store();
        let events = recorder(&mut store);

        store.toggle_lock(4).unwrap();
        store.generate();
        let id = store.save_palette();
        store.set_format(ColorFormat::Hsl);
        store.load_palette(id).unwrap();
        let _ = store.delete_palette(PaletteId::new(42));

        let events = events.borrow();
        assert_eq!(events.len(), 5);
        assert_eq!(events[0], StoreEvent::LockToggled { index: 4, locked: true });
        assert_eq!(events[1], StoreEvent::Generated { changed: vec![0, 1, 2, 3] });
        assert_eq!(events[2], StoreEvent::PaletteSaved(id));
        assert_eq!(events[3], StoreEvent::FormatChanged(ColorFormat::Hsl));
        assert_eq!(events[4], StoreEvent::PaletteLoaded(id));
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let mut store = sample_store();
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        let id = store.subscribe(move |_| *sink.borrow_mut() += 1);

        store.generate();
        assert!(store.unsubscribe(id));
        store.generate();

        assert_eq!(*count.borrow(), 1);
        assert!(!store.unsubscribe(id));
    }

    #[test]
    fn test_from_config_pads_and_truncates() {
        let config = PaletteConfig {
            slot_count: 3,
            initial_colors: vec!["#111111".to_string()],
            generate_on_start: false,
        };
        let store = PaletteStore::from_config(&config).unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.slots()[0].value.as_str(), "#111111");

        let config = PaletteConfig {
            slot_count: 1,
            initial_colors: vec!["#111111".to_string(), "#222222".to_string()],
            generate_on_start: false,
        };
        let store = PaletteStore::from_config(&config).unwrap();
        assert_eq!(store.colors(), vec![hex("#111111")]);
    }
}
