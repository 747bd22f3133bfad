pub(crate) mod internal {
    // Crate-internal impls.

    /// Generates constructors, accessors and the standard conversions for a
    /// fixed-size byte buffer newtype.
    macro_rules! impl_buf_core {
        ($name:ident, $len:expr) => {
            impl $name {
                pub const LEN: usize = $len;

                pub const fn new(data: [u8; $len]) -> Self {
                    Self(data)
                }

                pub const fn zero() -> Self {
                    Self([0; $len])
                }

                pub const fn as_slice(&self) -> &[u8] {
                    &self.0
                }

                pub const fn is_zero(&self) -> bool {
                    let mut i = 0;
                    while i < $len {
                        if self.0[i] != 0 {
                            return false;
                        }
                        i += 1;
                    }
                    true
                }
            }

            impl ::std::convert::AsRef<[u8]> for $name {
                fn as_ref(&self) -> &[u8] {
                    &self.0
                }
            }

            impl ::std::convert::From<[u8; $len]> for $name {
                fn from(data: [u8; $len]) -> Self {
                    Self(data)
                }
            }

            impl ::std::convert::From<$name> for [u8; $len] {
                fn from(buf: $name) -> Self {
                    buf.0
                }
            }

            impl<'a> ::std::convert::TryFrom<&'a [u8]> for $name {
                type Error = &'a [u8];

                fn try_from(value: &'a [u8]) -> Result<Self, Self::Error> {
                    <[u8; $len]>::try_from(value)
                        .map(Self)
                        .map_err(|_| value)
                }
            }

            impl ::std::default::Default for $name {
                fn default() -> Self {
                    Self::zero()
                }
            }
        };
    }

    /// `Debug` prints the full `0x`-prefixed hex, `Display` only the edges.
    macro_rules! impl_buf_fmt {
        ($name:ident, $len:expr) => {
            impl ::std::fmt::Debug for $name {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    write!(f, "0x{}", ::hex::encode(self.0))
                }
            }

            impl ::std::fmt::Display for $name {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    write!(
                        f,
                        "{}..{}",
                        ::hex::encode(&self.0[..3]),
                        ::hex::encode(&self.0[$len - 3..])
                    )
                }
            }
        };
    }

    macro_rules! impl_buf_borsh {
        ($name:ident, $len:expr) => {
            impl ::borsh::BorshSerialize for $name {
                fn serialize<W: ::std::io::Write>(&self, writer: &mut W) -> ::std::io::Result<()> {
                    writer.write_all(&self.0)
                }
            }

            impl ::borsh::BorshDeserialize for $name {
                fn deserialize_reader<R: ::std::io::Read>(
                    reader: &mut R,
                ) -> ::std::io::Result<Self> {
                    let mut array = [0u8; $len];
                    reader.read_exact(&mut array)?;
                    Ok(Self(array))
                }
            }
        };
    }

    macro_rules! impl_buf_arbitrary {
        ($name:ident, $len:expr) => {
            impl<'a> ::arbitrary::Arbitrary<'a> for $name {
                fn arbitrary(u: &mut ::arbitrary::Unstructured<'a>) -> ::arbitrary::Result<Self> {
                    let mut array = [0u8; $len];
                    u.fill_buffer(&mut array)?;
                    Ok(Self(array))
                }
            }
        };
    }

    /// Serializes as a `0x`-prefixed hex string in human readable formats and
    /// as raw bytes otherwise. The prefix is optional when parsing.
    macro_rules! impl_buf_serde {
        ($name:ident, $len:expr) => {
            impl ::serde::Serialize for $name {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: ::serde::Serializer,
                {
                    if serializer.is_human_readable() {
                        serializer.serialize_str(&format!("0x{}", ::hex::encode(self.0)))
                    } else {
                        serializer.serialize_bytes(&self.0)
                    }
                }
            }

            impl<'de> ::serde::Deserialize<'de> for $name {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: ::serde::Deserializer<'de>,
                {
                    struct BufVisitor;

                    impl<'de> ::serde::de::Visitor<'de> for BufVisitor {
                        type Value = $name;

                        fn expecting(
                            &self,
                            formatter: &mut ::std::fmt::Formatter<'_>,
                        ) -> ::std::fmt::Result {
                            write!(formatter, "{} bytes as an optionally 0x-prefixed hex string", $len)
                        }

                        fn visit_str<E>(self, v: &str) -> Result<$name, E>
                        where
                            E: ::serde::de::Error,
                        {
                            let digits = v
                                .strip_prefix("0x")
                                .or_else(|| v.strip_prefix("0X"))
                                .unwrap_or(v);
                            let mut array = [0u8; $len];
                            ::hex::decode_to_slice(digits, &mut array).map_err(E::custom)?;
                            Ok($name(array))
                        }

                        fn visit_bytes<E>(self, v: &[u8]) -> Result<$name, E>
                        where
                            E: ::serde::de::Error,
                        {
                            <[u8; $len]>::try_from(v).map($name).map_err(|_| {
                                E::custom(format!("expected {} bytes, got {}", $len, v.len()))
                            })
                        }

                        fn visit_seq<A>(self, mut seq: A) -> Result<$name, A::Error>
                        where
                            A: ::serde::de::SeqAccess<'de>,
                        {
                            let mut array = [0u8; $len];
                            for (i, byte) in array.iter_mut().enumerate() {
                                *byte = seq
                                    .next_element::<u8>()?
                                    .ok_or_else(|| ::serde::de::Error::invalid_length(i, &self))?;
                            }
                            if seq.next_element::<u8>()?.is_some() {
                                return Err(::serde::de::Error::invalid_length($len + 1, &self));
                            }
                            Ok($name(array))
                        }
                    }

                    if deserializer.is_human_readable() {
                        deserializer.deserialize_any(BufVisitor)
                    } else {
                        deserializer.deserialize_bytes(BufVisitor)
                    }
                }
            }
        };
    }

    pub(crate) use impl_buf_arbitrary;
    pub(crate) use impl_buf_borsh;
    pub(crate) use impl_buf_core;
    pub(crate) use impl_buf_fmt;
    pub(crate) use impl_buf_serde;
}
