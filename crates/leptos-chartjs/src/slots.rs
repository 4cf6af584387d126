//! Chart slot registry
//!
//! One persistent chart instance per slot. The first render builds the
//! instance; every later render replaces its data in place.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::backend::{ChartBackend, ChartError};
use crate::config::ChartConfig;

/// A fixed visualization location on the page
pub trait ChartSlotKey: Copy + Eq + Hash + Debug {
    /// DOM id of the canvas the slot draws on
    fn canvas_id(&self) -> &'static str;
}

pub struct ChartSlots<K, B: ChartBackend> {
    backend: B,
    instances: HashMap<K, B::Instance>,
}

impl<K: ChartSlotKey, B: ChartBackend> ChartSlots<K, B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            instances: HashMap::new(),
        }
    }

    /// Create the slot's chart on first call, update it in place afterwards
    pub fn render(&mut self, slot: K, config: ChartConfig) -> Result<(), ChartError> {
        match self.instances.get_mut(&slot) {
            Some(instance) => {
                log::debug!("[CHART] updating {:?} in place", slot);
                self.backend.replace_data(instance, &config.data)
            }
            None => {
                log::debug!("[CHART] creating {:?} on #{}", slot, slot.canvas_id());
                // A failed create leaves the slot empty so the next render retries
                let instance = self.backend.create(slot.canvas_id(), &config)?;
                self.instances.insert(slot, instance);
                Ok(())
            }
        }
    }

    pub fn contains(&self, slot: K) -> bool {
        self.instances.contains_key(&slot)
    }

    /// Number of live chart instances
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn instance(&self, slot: K) -> Option<&B::Instance> {
        self.instances.get(&slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ChartData, ChartKind, Dataset};
    use std::cell::Cell;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    enum Slot {
        Bar,
        Line,
    }

    impl ChartSlotKey for Slot {
        fn canvas_id(&self) -> &'static str {
            match self {
                Slot::Bar => "bar",
                Slot::Line => "line",
            }
        }
    }

    #[derive(Debug)]
    struct FakeChart {
        serial: usize,
        canvas: String,
        data: ChartData,
        redraws: usize,
    }

    #[derive(Default)]
    struct FakeBackend {
        created: Cell<usize>,
        fail_create: Cell<bool>,
    }

    impl ChartBackend for &FakeBackend {
        type Instance = FakeChart;

        fn create(&self, canvas_id: &str, config: &ChartConfig) -> Result<FakeChart, ChartError> {
            if self.fail_create.get() {
                return Err(ChartError::CanvasNotFound(canvas_id.to_string()));
            }
            self.created.set(self.created.get() + 1);
            Ok(FakeChart {
                serial: self.created.get(),
                canvas: canvas_id.to_string(),
                data: config.data.clone(),
                redraws: 0,
            })
        }

        fn replace_data(
            &self,
            instance: &mut FakeChart,
            data: &ChartData,
        ) -> Result<(), ChartError> {
            instance.data = data.clone();
            instance.redraws += 1;
            Ok(())
        }
    }

    fn config(values: &[f64]) -> ChartConfig {
        ChartConfig::new(
            ChartKind::Bar,
            ChartData {
                labels: values.iter().map(|v| v.to_string()).collect(),
                datasets: vec![Dataset::new(values.to_vec())],
            },
        )
    }

    #[test]
    fn test_second_render_updates_in_place() {
        let backend = FakeBackend::default();
        let mut slots = ChartSlots::new(&backend);

        slots.render(Slot::Bar, config(&[1.0, 2.0])).unwrap();
        slots.render(Slot::Bar, config(&[3.0])).unwrap();

        assert_eq!(slots.len(), 1);
        assert_eq!(backend.created.get(), 1);
        let chart = slots.instance(Slot::Bar).unwrap();
        assert_eq!(chart.serial, 1);
        assert_eq!(chart.redraws, 1);
        assert_eq!(chart.data.datasets[0].data, vec![3.0]);
        assert_eq!(chart.data.labels, vec!["3".to_string()]);
    }

    #[test]
    fn test_slots_are_independent() {
        let backend = FakeBackend::default();
        let mut slots = ChartSlots::new(&backend);

        slots.render(Slot::Bar, config(&[1.0])).unwrap();
        slots.render(Slot::Line, config(&[2.0])).unwrap();

        assert_eq!(slots.len(), 2);
        assert_eq!(slots.instance(Slot::Bar).unwrap().canvas, "bar");
        assert_eq!(slots.instance(Slot::Line).unwrap().canvas, "line");
        assert_eq!(slots.instance(Slot::Line).unwrap().redraws, 0);
    }

    #[test]
    fn test_failed_create_is_retried() {
        let backend = FakeBackend::default();
        let mut slots = ChartSlots::new(&backend);

        backend.fail_create.set(true);
        assert!(slots.render(Slot::Line, config(&[1.0])).is_err());
        assert!(!slots.contains(Slot::Line));

        backend.fail_create.set(false);
        slots.render(Slot::Line, config(&[1.0])).unwrap();
        assert!(slots.contains(Slot::Line));
        assert_eq!(backend.created.get(), 1);
    }
}
