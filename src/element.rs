//! Five elements and per-element vectors
//!
//! Generation cycle: wood → fire → earth → metal → water → wood
//! Restriction cycle: wood ⊣ earth, earth ⊣ water, water ⊣ fire, fire ⊣ metal, metal ⊣ wood
//!
//! `Element::ALL` doubles as the fixed priority order used for every tie-break.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five elemental categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl Element {
    /// Generation-cycle order, also the tie-break priority order
    pub const ALL: [Element; 5] = [
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Water,
    ];

    /// Position in the generation cycle (0-4)
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Element {
        Self::ALL[index % 5]
    }

    /// Chinese label (木火土金水)
    pub fn label(self) -> &'static str {
        match self {
            Element::Wood => "木",
            Element::Fire => "火",
            Element::Earth => "土",
            Element::Metal => "金",
            Element::Water => "水",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Element::Wood => "wood",
            Element::Fire => "fire",
            Element::Earth => "earth",
            Element::Metal => "metal",
            Element::Water => "water",
        }
    }

    /// The element this one generates
    pub fn generates(self) -> Element {
        Self::from_index(self.index() + 1)
    }

    /// The element that generates this one
    pub fn generated_by(self) -> Element {
        Self::from_index(self.index() + 4)
    }

    /// The element this one restricts
    pub fn restricts(self) -> Element {
        Self::from_index(self.index() + 2)
    }

    /// The element that restricts this one
    pub fn restricted_by(self) -> Element {
        Self::from_index(self.index() + 3)
    }

    /// Forward distance from `from` to `self` along the generation cycle (0-4)
    pub fn cycle_distance(self, from: Element) -> usize {
        (self.index() + 5 - from.index()) % 5
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value for each of the five elements; never partially populated
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ElementMap<T> {
    pub wood: T,
    pub fire: T,
    pub earth: T,
    pub metal: T,
    pub water: T,
}

impl<T: Copy> ElementMap<T> {
    /// Same value for every element
    pub fn splat(value: T) -> Self {
        Self {
            wood: value,
            fire: value,
            earth: value,
            metal: value,
            water: value,
        }
    }

    pub fn from_fn(mut f: impl FnMut(Element) -> T) -> Self {
        Self {
            wood: f(Element::Wood),
            fire: f(Element::Fire),
            earth: f(Element::Earth),
            metal: f(Element::Metal),
            water: f(Element::Water),
        }
    }

    pub fn get(&self, element: Element) -> T {
        match element {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }

    pub fn get_mut(&mut self, element: Element) -> &mut T {
        match element {
            Element::Wood => &mut self.wood,
            Element::Fire => &mut self.fire,
            Element::Earth => &mut self.earth,
            Element::Metal => &mut self.metal,
            Element::Water => &mut self.water,
        }
    }

    /// (element, value) pairs in priority order
    pub fn iter(&self) -> impl Iterator<Item = (Element, T)> + '_ {
        Element::ALL.into_iter().map(move |e| (e, self.get(e)))
    }

    pub fn map<U: Copy>(&self, mut f: impl FnMut(Element, T) -> U) -> ElementMap<U> {
        ElementMap::from_fn(|e| f(e, self.get(e)))
    }
}

/// Raw, non-negative per-element scores
pub type ElementScores = ElementMap<f64>;

impl ElementMap<f64> {
    pub fn total(&self) -> f64 {
        self.iter().map(|(_, v)| v).sum()
    }

    pub fn mean(&self) -> f64 {
        self.total() / 5.0
    }

    pub fn add(&mut self, element: Element, amount: f64) {
        *self.get_mut(element) += amount;
    }

    pub fn scale(&mut self, element: Element, factor: f64) {
        *self.get_mut(element) *= factor;
    }
}

/// Percentage distribution (one decimal place, sums to ~100)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementPercentages(pub(crate) ElementMap<f64>);

impl ElementPercentages {
    /// Even 20.0 split, used whenever the source total is zero
    pub fn even() -> Self {
        Self(ElementMap::splat(20.0))
    }

    pub fn get(&self, element: Element) -> f64 {
        self.0.get(element)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Element, f64)> + '_ {
        self.0.iter()
    }

    pub fn sum(&self) -> f64 {
        self.0.total()
    }

    pub fn as_map(&self) -> &ElementMap<f64> {
        &self.0
    }

    /// Spread between largest and smallest share, in percentage points
    pub fn spread(&self) -> f64 {
        let max = self.iter().map(|(_, v)| v).fold(f64::MIN, f64::max);
        let min = self.iter().map(|(_, v)| v).fold(f64::MAX, f64::min);
        max - min
    }
}
