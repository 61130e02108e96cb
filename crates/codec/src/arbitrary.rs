use arbitrary::{Arbitrary, Unstructured};

use crate::{ByteWidth, Endian, IntFormat, Signedness};

impl<'a> Arbitrary<'a> for ByteWidth {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(*u.choose(&ByteWidth::ALL)?)
    }
}

impl<'a> Arbitrary<'a> for Endian {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(if bool::arbitrary(u)? {
            Endian::Big
        } else {
            Endian::Little
        })
    }
}

impl<'a> Arbitrary<'a> for Signedness {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(if bool::arbitrary(u)? {
            Signedness::Signed
        } else {
            Signedness::Unsigned
        })
    }
}

impl<'a> Arbitrary<'a> for IntFormat {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let width = ByteWidth::arbitrary(u)?;
        let signedness = Signedness::arbitrary(u)?;
        let endian = Endian::arbitrary(u)?;
        Ok(IntFormat::new(width, signedness, endian))
    }
}
