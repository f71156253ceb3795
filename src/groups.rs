//! Groups from [RFC 5054](https://tools.ietf.org/html/rfc5054)
//!
//! It is strongly recommended to use them instead of custom generated
//! groups. Additionally, it is not recommended to use `G_1024` and `G_1536`,
//! they are provided only for compatibility with the legacy software.

use num_bigint::BigUint;
use once_cell::sync::Lazy;

use crate::params::SrpGroup;

macro_rules! define_group {
    ($name:ident, $g:expr, $n:expr, $doc:expr) => {
        #[doc = $doc]
        pub static $name: Lazy<SrpGroup> = Lazy::new(|| {
            SrpGroup::new(
                BigUint::from_bytes_be(include_bytes!($n)),
                BigUint::from($g as u32),
            )
        });
    };
}

define_group!(G_1024, 2, "groups/1024.bin", "1024-bit group.");
define_group!(G_1536, 2, "groups/1536.bin", "1536-bit group.");
define_group!(G_2048, 2, "groups/2048.bin", "2048-bit group.");
define_group!(G_3072, 5, "groups/3072.bin", "3072-bit group.");
define_group!(G_4096, 5, "groups/4096.bin", "4096-bit group.");

#[cfg(test)]
mod tests {
    use hex_literal::hex;
    use sha1::Sha1;

    use super::G_1024;
    use crate::params::{SrpParameters, UPadding};
    use crate::routines::{DefaultRoutines, SrpRoutines};

    #[test]
    fn k_1024_sha1() {
        let params = SrpParameters::<Sha1>::with_options(&G_1024, UPadding::Padded, true);
        let k = DefaultRoutines::new(params).compute_multiplier();
        assert_eq!(
            k.to_bytes_be(),
            hex!("7556AA04 5AEF2CDD 07ABAF0F 665C3E81 8913186F")
        );
    }
}
