use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum::{Display, EnumIter, EnumString};

/// ALU computation selector of a compute instruction.
///
/// The discriminant is the 7-bit `a c1 c2 c3 c4 c5 c6` field, so the
/// numeric value of a variant is exactly what lands in bits 12..6 of the
/// encoded word.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    IntoPrimitive,
    TryFromPrimitive,
    EnumString,
    EnumIter,
    Display,
)]
#[repr(u8)]
pub enum Comp {
    #[strum(to_string = "0")]
    Zero = 0b0101010,
    #[strum(to_string = "1")]
    One = 0b0111111,
    #[strum(to_string = "-1")]
    NegOne = 0b0111010,
    #[strum(to_string = "D")]
    D = 0b0001100,
    #[strum(to_string = "A")]
    A = 0b0110000,
    #[strum(to_string = "M")]
    M = 0b1110000,
    #[strum(to_string = "!D")]
    NotD = 0b0001101,
    #[strum(to_string = "!A")]
    NotA = 0b0110001,
    #[strum(to_string = "!M")]
    NotM = 0b1110001,
    #[strum(to_string = "-D")]
    NegD = 0b0001111,
    #[strum(to_string = "-A")]
    NegA = 0b0110011,
    #[strum(to_string = "-M")]
    NegM = 0b1110011,
    #[strum(to_string = "D+1")]
    DPlusOne = 0b0011111,
    #[strum(to_string = "A+1")]
    APlusOne = 0b0110111,
    #[strum(to_string = "M+1")]
    MPlusOne = 0b1110111,
    #[strum(to_string = "D-1")]
    DMinusOne = 0b0001110,
    #[strum(to_string = "A-1")]
    AMinusOne = 0b0110010,
    #[strum(to_string = "M-1")]
    MMinusOne = 0b1110010,
    #[strum(to_string = "D+A")]
    DPlusA = 0b0000010,
    #[strum(to_string = "D+M")]
    DPlusM = 0b1000010,
    #[strum(to_string = "D-A")]
    DMinusA = 0b0010011,
    #[strum(to_string = "D-M")]
    DMinusM = 0b1010011,
    #[strum(to_string = "A-D")]
    AMinusD = 0b0000111,
    #[strum(to_string = "M-D")]
    MMinusD = 0b1000111,
    #[strum(to_string = "D&A")]
    DAndA = 0b0000000,
    #[strum(to_string = "D&M")]
    DAndM = 0b1000000,
    #[strum(to_string = "D|A")]
    DOrA = 0b0010101,
    #[strum(to_string = "D|M")]
    DOrM = 0b1010101,
}

impl Comp {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.trim().parse::<Self>() {
            Ok(comp) => Ok(comp),
            Err(_) => Err(format!("Unknown computation: `{s}`")),
        }
    }

    pub fn code(self) -> u16 {
        u8::from(self) as u16
    }

    pub fn from_code(code: u16) -> Option<Self> {
        u8::try_from(code)
            .ok()
            .and_then(|code| Self::try_from(code).ok())
    }
}
