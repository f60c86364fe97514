// Flask contents while the user is picking reactants
use std::rc::Rc;
use yew::Reducible;

use crate::engine::MIN_REACTANTS;
use crate::model::CompoundId;

#[derive(Clone, Debug, PartialEq)]
pub struct Flask {
    /// In insertion order; the same compound may appear several times.
    pub slots: Vec<CompoundId>,
    pub capacity: usize,
}

#[derive(Clone, Debug)]
pub enum FlaskAction {
    Add(CompoundId),
    Remove(usize),
    /// Take one slot per listed id out of the flask; a reaction consumed them.
    Take(Vec<CompoundId>),
    Clear,
}

impl Flask {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::new(),
            capacity,
        }
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    pub fn can_react(&self) -> bool {
        self.slots.len() >= MIN_REACTANTS
    }

    /// Returns false when the action changed nothing.
    pub fn apply(&mut self, action: FlaskAction) -> bool {
        match action {
            FlaskAction::Add(id) => {
                if self.is_full() {
                    return false;
                }
                self.slots.push(id);
                true
            }
            FlaskAction::Remove(idx) => {
                if idx >= self.slots.len() {
                    return false;
                }
                self.slots.remove(idx);
                true
            }
            FlaskAction::Take(ids) => {
                let mut changed = false;
                for id in &ids {
                    if let Some(pos) = self.slots.iter().position(|s| s == id) {
                        self.slots.remove(pos);
                        changed = true;
                    }
                }
                changed
            }
            FlaskAction::Clear => {
                let changed = !self.slots.is_empty();
                self.slots.clear();
                changed
            }
        }
    }
}

impl Reducible for Flask {
    type Action = FlaskAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        if new.apply(action) { Rc::new(new) } else { self }
    }
}
