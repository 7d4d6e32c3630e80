//! Display formatting in the `A,B->C` notation
//!
//! The output is accepted by [`FunctionalDependency::parse`] and
//! [`DependencySet::parse`]. Attributes that are not plain words are quoted.

use super::{Attribute, AttributeSet, DependencySet, FunctionalDependency};
use std::fmt;

fn is_plain(attribute: &str) -> bool {
    !attribute.is_empty()
        && attribute
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn write_attribute(f: &mut fmt::Formatter<'_>, attribute: &Attribute) -> fmt::Result {
    if is_plain(attribute) {
        write!(f, "{}", attribute)
    } else {
        write!(f, "\"")?;
        for c in attribute.chars() {
            if c == '"' || c == '\\' {
                write!(f, "\\")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, "\"")
    }
}

impl fmt::Display for AttributeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, attribute) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write_attribute(f, attribute)?;
        }
        Ok(())
    }
}

impl fmt::Display for FunctionalDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.lhs(), self.rhs())
    }
}

impl fmt::Display for DependencySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, fd) in self.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", fd)?;
        }
        Ok(())
    }
}
