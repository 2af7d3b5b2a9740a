// Copyright 2025 the NetCanvas Authors
// SPDX-License-Identifier: Apache-2.0

//! The registry of live equipment.
//!
//! The registry owns every placed `Equipment` together with the canvas items
//! that show it (icon and label) and its link drafts. It assigns ids from its
//! own counter and keeps a reverse map from icon handle to id. Both
//! directions are inserted together on `insert` and removed together on
//! `remove`, so a surface that recycles handle numbers can never make a new
//! icon resolve to a deleted equipment.

use super::links::LinkDrafts;
use crate::error::CanvasError;
use crate::model::{Equipment, EquipmentId, IconLoader, LinkSlot, NameSequence};
use crate::surface::{Binding, CanvasSurface, ItemHandle, ItemKind};
use kurbo::{Point, Vec2};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// A live equipment and everything drawn for it
#[derive(Debug, Clone)]
pub struct EquipmentEntry {
    pub equipment: Equipment,
    /// Canvas item showing the icon
    pub icon: ItemHandle,
    /// Canvas item showing the name
    pub label: ItemHandle,
    pub links: LinkDrafts,
}

/// All equipment currently on the canvas
#[derive(Debug, Clone)]
pub struct EquipmentRegistry {
    entries: BTreeMap<EquipmentId, EquipmentEntry>,
    handle_to_id: HashMap<ItemHandle, EquipmentId>,
    next_id: EquipmentId,
    names: NameSequence,
}

impl EquipmentRegistry {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            handle_to_id: HashMap::new(),
            next_id: EquipmentId::FIRST,
            names: NameSequence::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Live entries in id order
    pub fn iter(&self) -> impl Iterator<Item = (EquipmentId, &EquipmentEntry)> {
        self.entries.iter().map(|(id, entry)| (*id, entry))
    }

    pub fn get(&self, id: EquipmentId) -> Option<&EquipmentEntry> {
        self.entries.get(&id)
    }

    /// The equipment an icon handle belongs to
    pub fn id_of(&self, handle: ItemHandle) -> Option<EquipmentId> {
        self.handle_to_id.get(&handle).copied()
    }

    /// Default-name counters
    pub fn names(&self) -> &NameSequence {
        &self.names
    }

    /// Create an equipment and draw it centred on `center`.
    ///
    /// The icon is drawn with its label just below, bound to the equipment
    /// interaction events, and raised above everything inserted before it.
    /// Nothing is drawn or recorded if creation fails.
    pub fn insert(
        &mut self,
        surface: &mut impl CanvasSurface,
        loader: &impl IconLoader,
        kind: &str,
        center: Point,
    ) -> Result<(EquipmentId, ItemHandle), CanvasError> {
        let equipment = Equipment::create(kind, loader, &mut self.names)?;

        let icon = surface.draw_icon(center, equipment.icon());
        let label_center = center + Vec2::new(0.0, (equipment.icon().height() / 2) as f64);
        let label = surface.draw_text(label_center, equipment.name());
        surface.bind(icon, &Binding::EQUIPMENT);
        // Newest equipment on top
        surface.raise(icon);

        let id = self.next_id;
        self.next_id = id.successor();
        debug_assert!(!self.handle_to_id.contains_key(&icon));
        self.handle_to_id.insert(icon, id);

        tracing::info!(
            "Inserted {} {} '{}' as item {}",
            equipment.kind(),
            id,
            equipment.name(),
            icon
        );
        self.entries.insert(
            id,
            EquipmentEntry {
                equipment,
                icon,
                label,
                links: LinkDrafts::new(),
            },
        );
        Ok((id, icon))
    }

    /// Delete the equipment shown by `handle`, with its label and links.
    pub fn remove(
        &mut self,
        surface: &mut impl CanvasSurface,
        handle: ItemHandle,
    ) -> Result<EquipmentEntry, CanvasError> {
        let id = self
            .handle_to_id
            .remove(&handle)
            .ok_or(CanvasError::UnknownHandle(handle))?;
        let entry = self
            .entries
            .remove(&id)
            .ok_or(CanvasError::UnknownHandle(handle))?;

        surface.lower(handle);
        surface.delete(handle);
        surface.delete(entry.label);
        for artifact in entry.links.artifacts() {
            surface.delete(artifact);
        }

        tracing::info!("Removed {} '{}'", id, entry.equipment.name());
        Ok(entry)
    }

    pub fn lookup(&self, handle: ItemHandle) -> Result<&EquipmentEntry, CanvasError> {
        self.id_of(handle)
            .and_then(|id| self.entries.get(&id))
            .ok_or(CanvasError::UnknownHandle(handle))
    }

    fn lookup_mut(&mut self, handle: ItemHandle) -> Result<&mut EquipmentEntry, CanvasError> {
        let id = self.id_of(handle).ok_or(CanvasError::UnknownHandle(handle))?;
        self.entries
            .get_mut(&id)
            .ok_or(CanvasError::UnknownHandle(handle))
    }

    /// The equipment icon closest to `point`
    pub fn nearest_to(&self, surface: &impl CanvasSurface, point: Point) -> Option<ItemHandle> {
        surface.nearest_to(point, Some(ItemKind::Icon))
    }

    /// Rename an equipment and update its label.
    pub fn rename(
        &mut self,
        surface: &mut impl CanvasSurface,
        handle: ItemHandle,
        name: &str,
    ) -> Result<(), CanvasError> {
        let entry = self.lookup_mut(handle)?;
        entry.equipment.set_name(name);
        surface.set_item_text(entry.label, entry.equipment.name());
        tracing::info!("Renamed item {} to '{}'", handle, name);
        Ok(())
    }

    /// Load a new icon for an equipment and show it.
    pub fn change_icon(
        &mut self,
        surface: &mut impl CanvasSurface,
        loader: &impl IconLoader,
        handle: ItemHandle,
        path: &Path,
    ) -> Result<(), CanvasError> {
        let entry = self.lookup_mut(handle)?;
        entry.equipment.set_icon(path, loader)?;
        surface.set_item_image(handle, entry.equipment.icon());
        tracing::info!(
            "Changed icon of '{}' to {}",
            entry.equipment.name(),
            path.display()
        );
        Ok(())
    }

    /// Start a link draft from an equipment.
    pub fn begin_link_draft(
        &mut self,
        id: EquipmentId,
        source: Point,
    ) -> Result<LinkSlot, CanvasError> {
        let entry = self
            .entries
            .get_mut(&id)
            .ok_or(CanvasError::UnknownEquipment(id))?;
        let slot = entry.links.begin(&mut entry.equipment, source);
        tracing::info!(
            "Started link {} from '{}' at ({}, {})",
            slot.0,
            entry.equipment.name(),
            source.x,
            source.y
        );
        Ok(slot)
    }
}

impl Default for EquipmentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::test_support::TestIcons;
    use crate::model::EquipmentKind;
    use crate::surface::DisplayList;
    use kurbo::Size;

    const CENTER: Point = Point::new(400.0, 400.0);

    fn setup() -> (EquipmentRegistry, DisplayList, TestIcons) {
        (
            EquipmentRegistry::new(),
            DisplayList::new(Size::new(800.0, 800.0)),
            TestIcons::new(),
        )
    }

    fn name_of(registry: &EquipmentRegistry, id: EquipmentId) -> String {
        registry.get(id).unwrap().equipment.name().to_string()
    }

    #[test]
    fn ids_and_names_follow_the_reference_scenario() {
        let (mut registry, mut canvas, icons) = setup();

        let (id1, handle1) = registry.insert(&mut canvas, &icons, "switch", CENTER).unwrap();
        let (id2, _) = registry.insert(&mut canvas, &icons, "switch", CENTER).unwrap();
        assert_eq!(id1.get(), 1);
        assert_eq!(name_of(&registry, id1), "switch-1");
        assert_eq!(id2.get(), 2);
        assert_eq!(name_of(&registry, id2), "switch-2");

        registry.remove(&mut canvas, handle1).unwrap();
        let (id3, _) = registry.insert(&mut canvas, &icons, "switch", CENTER).unwrap();
        assert_eq!(id3.get(), 3);
        assert_eq!(name_of(&registry, id3), "switch-3");
    }

    #[test]
    fn ids_strictly_increase_across_kinds_and_deletes() {
        let (mut registry, mut canvas, icons) = setup();
        let mut last = 0;
        for (i, kind) in ["switch", "router", "pc", "mobile", "ROUTER"].iter().enumerate() {
            let (id, handle) = registry.insert(&mut canvas, &icons, kind, CENTER).unwrap();
            assert!(id.get() > last);
            last = id.get();
            if i % 2 == 0 {
                registry.remove(&mut canvas, handle).unwrap();
            }
        }
        assert_eq!(last, 5);
    }

    #[test]
    fn name_sequence_ignores_other_kinds() {
        let (mut registry, mut canvas, icons) = setup();
        let (a, _) = registry.insert(&mut canvas, &icons, "pc", CENTER).unwrap();
        let (_, router) = registry.insert(&mut canvas, &icons, "router", CENTER).unwrap();
        registry.remove(&mut canvas, router).unwrap();
        let (b, _) = registry.insert(&mut canvas, &icons, "pc", CENTER).unwrap();

        assert_eq!(name_of(&registry, a), "pc-1");
        assert_eq!(name_of(&registry, b), "pc-2");
        assert_eq!(registry.names().issued(EquipmentKind::Router), 1);
    }

    #[test]
    fn invalid_kind_adds_nothing() {
        let (mut registry, mut canvas, icons) = setup();
        let err = registry.insert(&mut canvas, &icons, "toaster", CENTER).unwrap_err();
        assert_eq!(err, CanvasError::InvalidKind("toaster".to_string()));
        assert!(registry.is_empty());
        assert!(canvas.is_empty());

        let (id, _) = registry.insert(&mut canvas, &icons, "switch", CENTER).unwrap();
        assert_eq!(id, EquipmentId::FIRST);
    }

    #[test]
    fn icon_failure_adds_nothing() {
        let (mut registry, mut canvas, _) = setup();
        let icons = TestIcons::new().failing_kind(EquipmentKind::Mobile);
        let err = registry.insert(&mut canvas, &icons, "mobile", CENTER).unwrap_err();
        assert!(matches!(err, CanvasError::IconLoadFailed { .. }));
        assert!(registry.is_empty());
        assert!(canvas.is_empty());
        assert_eq!(registry.names().issued(EquipmentKind::Mobile), 0);
    }

    #[test]
    fn insert_draws_icon_on_top_with_label_below() {
        let (mut registry, mut canvas, icons) = setup();
        let (_, first) = registry.insert(&mut canvas, &icons, "switch", CENTER).unwrap();
        let (id, second) = registry.insert(&mut canvas, &icons, "router", CENTER).unwrap();
        let entry = registry.get(id).unwrap();

        assert_eq!(canvas.z_order().last(), Some(&second));
        assert_eq!(canvas.get(second).unwrap().bounds().center(), CENTER);
        assert_eq!(
            canvas.get(entry.label).unwrap().bounds().center(),
            Point::new(400.0, 432.0)
        );
        assert!(canvas.get(second).unwrap().is_bound(Binding::PrimaryDrag));
        assert_ne!(first, second);
    }

    #[test]
    fn remove_then_lookup_or_remove_fails() {
        let (mut registry, mut canvas, icons) = setup();
        let (_, handle) = registry.insert(&mut canvas, &icons, "router", CENTER).unwrap();

        registry.remove(&mut canvas, handle).unwrap();
        assert_eq!(
            registry.lookup(handle).unwrap_err(),
            CanvasError::UnknownHandle(handle)
        );
        assert_eq!(
            registry.remove(&mut canvas, handle).unwrap_err(),
            CanvasError::UnknownHandle(handle)
        );
    }

    #[test]
    fn remove_cascades_to_label() {
        let (mut registry, mut canvas, icons) = setup();
        let (id, handle) = registry.insert(&mut canvas, &icons, "pc", CENTER).unwrap();
        let label = registry.get(id).unwrap().label;

        let removed = registry.remove(&mut canvas, handle).unwrap();
        assert_eq!(removed.label, label);
        assert!(canvas.is_empty());
        assert_eq!(registry.id_of(handle), None);
    }

    #[test]
    fn label_handle_is_not_an_equipment() {
        let (mut registry, mut canvas, icons) = setup();
        let (id, _) = registry.insert(&mut canvas, &icons, "pc", CENTER).unwrap();
        let label = registry.get(id).unwrap().label;

        assert_eq!(
            registry.remove(&mut canvas, label).unwrap_err(),
            CanvasError::UnknownHandle(label)
        );
        assert_eq!(registry.len(), 1);
        assert_eq!(canvas.len(), 2);
    }

    #[test]
    fn recycled_handles_do_not_alias_deleted_equipment() {
        let mut registry = EquipmentRegistry::new();
        let mut canvas = DisplayList::with_handle_recycling(Size::new(800.0, 800.0));
        let icons = TestIcons::new();

        let (old_id, old_handle) = registry.insert(&mut canvas, &icons, "switch", CENTER).unwrap();
        registry.remove(&mut canvas, old_handle).unwrap();
        let (new_id, new_handle) = registry.insert(&mut canvas, &icons, "router", CENTER).unwrap();

        assert_ne!(old_id, new_id);
        assert_eq!(registry.id_of(new_handle), Some(new_id));
        assert_eq!(
            registry.lookup(new_handle).unwrap().equipment.kind(),
            EquipmentKind::Router
        );
        assert!(registry.get(old_id).is_none());
    }

    #[test]
    fn nearest_to_skips_labels() {
        let (mut registry, mut canvas, icons) = setup();
        let (id, handle) = registry.insert(&mut canvas, &icons, "switch", CENTER).unwrap();
        let label = registry.get(id).unwrap().label;
        let label_center = canvas.get(label).unwrap().bounds().center();

        assert_eq!(registry.nearest_to(&canvas, label_center + Vec2::new(0.0, 20.0)), Some(handle));
    }

    #[test]
    fn rename_updates_label() {
        let (mut registry, mut canvas, icons) = setup();
        let (id, handle) = registry.insert(&mut canvas, &icons, "switch", CENTER).unwrap();
        registry.rename(&mut canvas, handle, "core").unwrap();

        let entry = registry.get(id).unwrap();
        assert_eq!(entry.equipment.name(), "core");
        match canvas.get(entry.label).unwrap().content() {
            crate::surface::ItemContent::Text(text) => assert_eq!(text, "core"),
            other => panic!("unexpected content: {other:?}"),
        }
    }

    #[test]
    fn failed_icon_change_keeps_canvas_image() {
        let (mut registry, mut canvas, _) = setup();
        let icons = TestIcons::new().failing_path("bad.png");
        let (_, handle) = registry.insert(&mut canvas, &icons, "switch", CENTER).unwrap();

        let err = registry
            .change_icon(&mut canvas, &icons, handle, Path::new("bad.png"))
            .unwrap_err();
        assert!(matches!(err, CanvasError::IconLoadFailed { .. }));
        let entry = registry.lookup(handle).unwrap();
        assert_eq!(entry.equipment.icon().source, Path::new("switch.png"));
        match canvas.get(handle).unwrap().content() {
            crate::surface::ItemContent::Icon(icon) => {
                assert!(icon.same_pixels(entry.equipment.icon()));
            }
            other => panic!("unexpected content: {other:?}"),
        }
    }

    #[test]
    fn link_slots_count_per_equipment() {
        let (mut registry, mut canvas, icons) = setup();
        let (router, _) = registry.insert(&mut canvas, &icons, "router", CENTER).unwrap();
        let (switch, _) = registry.insert(&mut canvas, &icons, "switch", CENTER).unwrap();

        let source = Point::new(12.0, 34.0);
        assert_eq!(registry.begin_link_draft(router, source), Ok(LinkSlot(1)));
        assert_eq!(registry.begin_link_draft(router, source), Ok(LinkSlot(2)));
        assert_eq!(registry.begin_link_draft(switch, source), Ok(LinkSlot(1)));
        assert_eq!(registry.get(router).unwrap().links.len(), 2);

        let missing = EquipmentId::FIRST.successor().successor();
        assert_eq!(
            registry.begin_link_draft(missing, source),
            Err(CanvasError::UnknownEquipment(missing))
        );
    }
}
