// the closed set: fingerprints of boards that have already been popped
// from the frontier, kept in a linear-probing open-addressing table

const INITIAL_SIZE: usize = 10;
const LOAD_FACTOR_THRESHOLD: f32 = 0.7;

fn is_prime(n: usize) -> bool {
    if n <= 1 {
        return false;
    }
    let mut i = 2;
    while i * i <= n {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

fn next_prime(n: usize) -> usize {
    (n..).find(|&candidate| is_prime(candidate)).unwrap_or(n)
}

/// An append-only set of board fingerprints
///
/// Slot 0 is the empty-slot sentinel; a valid board never fingerprints
/// to 0, so no disambiguation is needed. Entries are never removed, the
/// whole table is dropped with the search that owns it.
pub struct VisitedTable {
    slots: Vec<u64>,
    len: usize,
}

impl VisitedTable {
    pub fn new() -> Self {
        Self {
            slots: vec![0; next_prime(INITIAL_SIZE)],
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Records a fingerprint, growing the table first if the load factor
    /// would pass the threshold
    pub fn insert(&mut self, key: u64) {
        if self.len as f32 / self.slots.len() as f32 > LOAD_FACTOR_THRESHOLD {
            self.grow();
        }
        Self::probe_insert(&mut self.slots, key);
        self.len += 1;
    }

    /// Whether `key` has been inserted
    pub fn contains(&self, key: u64) -> bool {
        let capacity = self.slots.len();
        let mut i = 0;
        loop {
            let slot = self.slots[(key as usize + i) % capacity];
            if slot == 0 {
                // reached an empty slot without a match
                return false;
            } else if slot == key {
                return true;
            }
            i += 1;
        }
    }

    // linear probe forward from the key's home slot to the first empty slot
    fn probe_insert(slots: &mut [u64], key: u64) {
        let capacity = slots.len();
        let mut i = 0;
        loop {
            let slot = (key as usize + i) % capacity;
            if slots[slot] == 0 {
                slots[slot] = key;
                break;
            }
            i += 1;
        }
    }

    // rehash every key into a table of the next prime size past double
    fn grow(&mut self) {
        let mut slots = vec![0; next_prime(self.slots.len() * 2)];
        for &key in self.slots.iter().filter(|&&key| key != 0) {
            Self::probe_insert(&mut slots, key);
        }
        self.slots = slots;
    }
}

impl Default for VisitedTable {
    fn default() -> Self {
        Self::new()
    }
}
