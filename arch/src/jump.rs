use bimap::BiMap;
use once_cell::sync::Lazy;
use std::fmt::Display;

/// Jump condition of a compute instruction: the set of ALU output signs
/// (less than, equal to, greater than zero) on which the jump is taken.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Jump {
    pub lt: bool,
    pub eq: bool,
    pub gt: bool,
}

const fn jump(lt: bool, eq: bool, gt: bool) -> Jump {
    Jump { lt, eq, gt }
}

static JUMP_MAP: Lazy<BiMap<&'static str, Jump>> = Lazy::new(|| {
    let mut map: BiMap<&'static str, Jump> = BiMap::new();
    map.insert("JGT", jump(false, false, true));
    map.insert("JEQ", jump(false, true, false));
    map.insert("JGE", jump(false, true, true));
    map.insert("JLT", jump(true, false, false));
    map.insert("JNE", jump(true, false, true));
    map.insert("JLE", jump(true, true, false));
    map.insert("JMP", jump(true, true, true));
    map
});

impl Jump {
    pub const NEVER: Jump = jump(false, false, false);
    pub const ALWAYS: Jump = jump(true, true, true);

    pub fn parse(s: &str) -> Result<Self, String> {
        match JUMP_MAP.get_by_left(s.trim()) {
            Some(jump) => Ok(*jump),
            None => Err(format!("Unknown jump: `{s}`")),
        }
    }

    /// Mnemonic of this condition, `None` for the never-jump case.
    pub fn mnemonic(&self) -> Option<&'static str> {
        JUMP_MAP.get_by_right(self).copied()
    }

    /// `j1 j2 j3` = lt, eq, gt
    pub fn bits(&self) -> u16 {
        (self.lt as u16) << 2 | (self.eq as u16) << 1 | self.gt as u16
    }

    pub fn from_bits(bits: u16) -> Self {
        Jump {
            lt: bits & 0b100 != 0,
            eq: bits & 0b010 != 0,
            gt: bits & 0b001 != 0,
        }
    }
}

impl Display for Jump {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mnemonic().unwrap_or(""))
    }
}
