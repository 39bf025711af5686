/*!
An iterator over the Luby sequence, used to schedule restarts.

The sequence runs 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8, … (see <https://oeis.org/A182105>).

```rust
# use marten_sat::generic::luby::Luby;
let prefix = Luby::default().take(7).collect::<Vec<_>>();
assert_eq!(prefix, vec![1, 1, 2, 1, 1, 2, 4]);
```

Each element is found with the reluctant doubling recurrence: the element after a (complete) block of 2<sup>k</sup> - 1 elements is 2<sup>k - 1</sup>, and otherwise the sequence repeats itself from the start of the current block.
The iterator keeps only a pair of counters, `u` and `v`, from which the next element is derived in constant time, as in [Knuth's formulation](https://doi.org/10.1016/0020-0190(93)90029-9).
*/

/// Representation used for elements of the Luby sequence.
pub type LubyRepresentation = u32;

/// The state of the iterator.
pub struct Luby {
    /// Position within the current block.
    u: LubyRepresentation,

    /// The element most recently returned.
    v: LubyRepresentation,
}

impl Default for Luby {
    fn default() -> Self {
        Luby { u: 1, v: 1 }
    }
}

impl Iterator for Luby {
    type Item = LubyRepresentation;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.v;

        if self.u & self.u.wrapping_neg() == self.v {
            self.u = self.u.checked_add(1)?;
            self.v = 1;
        } else {
            self.v = self.v.checked_mul(2)?;
        }

        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LUBY_PREFIX: &[LubyRepresentation] = &[
        1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8, 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8,
        16, 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8, 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4,
        8, 16, 32, 1, 1, 2,
    ];

    #[test]
    fn luby_prefix() {
        let luby = Luby::default();
        for (found, known) in luby.zip(LUBY_PREFIX) {
            assert_eq!(found, *known);
        }
    }

    #[test]
    fn luby_block_ends() {
        // The element closing block k is 2^(k-1), at index 2^k - 2.
        let elements = Luby::default().take(1023).collect::<Vec<_>>();
        for k in 1..10 {
            assert_eq!(elements[(1 << k) - 2], 1 << (k - 1));
        }
    }
}
