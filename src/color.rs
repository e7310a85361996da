// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Turning a membership into a color.  The renderer only ever sees the
//! `ColorMap` trait, so a different mapping can be dropped in without
//! touching the evaluator.

use escape::Membership;

/// An 8-bit RGB triple.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Maps the evaluator's answer for a pixel to that pixel's color.
pub trait ColorMap: Sync {
    /// The color of a pixel with the given membership.
    fn color(&self, membership: Membership) -> Rgb;
}

/// One fixed color for points inside the set, another for points
/// outside it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TwoTone {
    /// Color of bounded points.
    pub inside: Rgb,
    /// Color of diverged points.
    pub outside: Rgb,
}

impl Default for TwoTone {
    fn default() -> TwoTone {
        TwoTone {
            inside: Rgb(3, 78, 252),
            outside: Rgb(0, 0, 0),
        }
    }
}

impl ColorMap for TwoTone {
    fn color(&self, membership: Membership) -> Rgb {
        match membership {
            Membership::Bounded => self.inside,
            Membership::Diverged => self.outside,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_two_tone_is_blue_on_black() {
        let colors = TwoTone::default();
        assert_eq!(colors.color(Membership::Bounded), Rgb(3, 78, 252));
        assert_eq!(colors.color(Membership::Diverged), Rgb(0, 0, 0));
    }
}
