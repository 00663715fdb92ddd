use std::ops::Index;


/// A named, dense feature column.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    name: String,
    vals: Vec<f64>,
}


impl Feature {
    /// Construct a new feature column named `name`
    /// holding the values `vals`.
    pub fn new<T: ToString>(name: T, vals: Vec<f64>) -> Self {
        Self { name: name.to_string(), vals, }
    }


    /// Construct an empty feature column named `name`.
    pub fn dense<T: ToString>(name: T) -> Self {
        Self::new(name, Vec::new())
    }


    /// Returns the name of this feature.
    pub fn name(&self) -> &str {
        &self.name
    }


    /// Returns the values of this feature.
    pub fn vals(&self) -> &[f64] {
        &self.vals[..]
    }


    /// Consumes `self` and returns the values.
    pub fn into_vals(self) -> Vec<f64> {
        self.vals
    }


    /// Push a value to the end of this column.
    pub fn append(&mut self, val: f64) {
        self.vals.push(val);
    }


    /// Returns the number of values.
    pub fn len(&self) -> usize {
        self.vals.len()
    }


    /// Returns `true` if this column has no value.
    pub fn is_empty(&self) -> bool {
        self.vals.is_empty()
    }


    /// Returns `true` if this feature takes the same value
    /// over all rows in `indices`.
    /// A `NaN` never equals another value,
    /// so a column containing `NaN` is never constant.
    pub(crate) fn is_constant_on(&self, indices: &[usize]) -> bool {
        match indices.split_first() {
            None => true,
            Some((&first, rest)) => {
                let v = self.vals[first];
                rest.iter().all(|&i| self.vals[i] == v)
            },
        }
    }


    /// Returns a new feature that consists of the rows in `indices`.
    pub(crate) fn subset(&self, indices: &[usize]) -> Self {
        let vals = indices.iter()
            .map(|&i| self.vals[i])
            .collect::<Vec<_>>();
        Self::new(&self.name, vals)
    }
}


impl Index<usize> for Feature {
    type Output = f64;
    fn index(&self, idx: usize) -> &Self::Output {
        &self.vals[idx]
    }
}
