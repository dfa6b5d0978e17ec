pub mod franchises;
pub mod glyphs;
pub mod junk;
pub mod patterns;
pub mod system_info;
pub mod whitespace;
