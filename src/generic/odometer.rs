/*!
An iterator over every tuple of a fixed length with entries drawn from [0..*radix*).

Tuples are given in lexicographic order, with the last entry turning fastest --- as with the digits of an odometer.
So, there are exactly *radix*^*length* tuples, and the first tuple is all zeros.

```rust
# use otter_monadic::generic::odometer::Odometer;
let tuples = Odometer::new(2, 2).collect::<Vec<_>>();
assert_eq!(tuples, vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]);
```

The count of tuples is not computed, and so the iterator is usable when the count exceeds any fixed width integer.
*/

/// Foundation of the iterator.
pub struct Odometer {
    radix: usize,
    digits: Vec<usize>,
    exhausted: bool,
}

impl Odometer {
    /// An odometer over tuples of the given length.
    ///
    /// A radix of zero has no tuples, unless the length is zero.
    pub fn new(radix: usize, length: usize) -> Self {
        Odometer {
            radix,
            digits: vec![0; length],
            exhausted: radix == 0 && length > 0,
        }
    }
}

impl Iterator for Odometer {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let current = self.digits.clone();

        // Advance, carrying from the last digit.
        self.exhausted = true;
        for digit in self.digits.iter_mut().rev() {
            *digit += 1;
            match *digit == self.radix {
                true => *digit = 0,
                false => {
                    self.exhausted = false;
                    break;
                }
            }
        }

        Some(current)
    }
}

#[cfg(test)]
mod odometer_tests {
    use super::*;

    #[test]
    fn counts() {
        assert_eq!(Odometer::new(2, 3).count(), 8);
        assert_eq!(Odometer::new(3, 4).count(), 81);
        assert_eq!(Odometer::new(5, 1).count(), 5);
    }

    #[test]
    fn degenerate() {
        assert_eq!(Odometer::new(3, 0).collect::<Vec<_>>(), vec![Vec::<usize>::new()]);
        assert_eq!(Odometer::new(0, 2).count(), 0);
        assert_eq!(Odometer::new(1, 3).collect::<Vec<_>>(), vec![vec![0, 0, 0]]);
    }

    #[test]
    fn order() {
        let mut odometer = Odometer::new(3, 2);
        assert_eq!(odometer.next(), Some(vec![0, 0]));
        assert_eq!(odometer.next(), Some(vec![0, 1]));
        assert_eq!(odometer.next(), Some(vec![0, 2]));
        assert_eq!(odometer.next(), Some(vec![1, 0]));
        assert_eq!(odometer.last(), Some(vec![2, 2]));
    }
}
