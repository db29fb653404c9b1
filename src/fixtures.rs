#[cfg(test)]
pub mod test {
    use std::collections::HashMap;

    use crate::schema::{Field, Schema, SetValue, Slot};

    /// Build a map-backed lookup source from literal pairs.
    pub fn source(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    /// Scalar kinds plus one unkeyed nested section.
    #[derive(Debug, Default, PartialEq)]
    pub struct ServerConfig {
        pub url: String,
        pub port: u16,
        pub debug: bool,
        pub rate: f64,
        pub database: DbConfig,
    }

    impl Schema for ServerConfig {
        fn fields(&mut self) -> Vec<Field<'_>> {
            vec![
                Field::keyed("url", "URL", Slot::Str(&mut self.url)),
                Field::keyed("port", "PORT", Slot::U16(&mut self.port)),
                Field::keyed("debug", "DEBUG", Slot::Bool(&mut self.debug)),
                Field::keyed("rate", "RATE", Slot::F64(&mut self.rate)),
                Field::new("database", Slot::Nested(&mut self.database)),
            ]
        }
    }

    #[derive(Debug, Default, PartialEq)]
    pub struct DbConfig {
        pub url: String,
        pub pool_size: usize,
    }

    impl Schema for DbConfig {
        fn fields(&mut self) -> Vec<Field<'_>> {
            vec![
                Field::keyed("url", "DB_URL", Slot::Str(&mut self.url)),
                Field::keyed("pool_size", "DB_POOL_SIZE", Slot::Usize(&mut self.pool_size)),
            ]
        }
    }

    /// Sequence, bytes, a skipped map, and a nested sub-struct.
    #[derive(Debug, Default, PartialEq)]
    pub struct MixedConfig {
        pub items: Vec<String>,
        pub key: Vec<u8>,
        pub objects: HashMap<String, String>,
        pub sub: SubConfig,
    }

    impl Schema for MixedConfig {
        fn fields(&mut self) -> Vec<Field<'_>> {
            vec![
                Field::keyed("items", "ITEMS", Slot::Seq(&mut self.items)),
                Field::keyed("key", "KEY", Slot::Bytes(&mut self.key)),
                // Maps are not a populatable kind; keyed or not, untouched.
                Field::keyed("objects", "OBJECTS", Slot::Skip),
                Field::new("sub", Slot::Nested(&mut self.sub)),
            ]
        }
    }

    #[derive(Debug, Default, PartialEq)]
    pub struct SubConfig {
        pub a: String,
        pub b: i32,
    }

    impl Schema for SubConfig {
        fn fields(&mut self) -> Vec<Field<'_>> {
            vec![
                Field::keyed("a", "A", Slot::Str(&mut self.a)),
                Field::keyed("b", "B", Slot::I32(&mut self.b)),
            ]
        }
    }

    /// The same key feeding a top-level field and a nested one.
    #[derive(Debug, Default, PartialEq)]
    pub struct CountConfig {
        pub count: u16,
        pub sub: CountSub,
    }

    impl Schema for CountConfig {
        fn fields(&mut self) -> Vec<Field<'_>> {
            vec![
                Field::keyed("count", "COUNT", Slot::U16(&mut self.count)),
                Field::new("sub", Slot::Nested(&mut self.sub)),
            ]
        }
    }

    #[derive(Debug, Default, PartialEq)]
    pub struct CountSub {
        pub count: u16,
    }

    impl Schema for CountSub {
        fn fields(&mut self) -> Vec<Field<'_>> {
            vec![Field::keyed("count", "COUNT", Slot::U16(&mut self.count))]
        }
    }

    /// Parses itself from `scheme://authority:port`.
    #[derive(Debug, Default, PartialEq)]
    pub struct Endpoint {
        pub scheme: String,
        pub host: String,
        pub port: u16,
    }

    impl SetValue for Endpoint {
        fn set(&mut self, value: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
            let (scheme, rest) = value.split_once("://").ok_or("missing scheme")?;
            let (host, port) = rest.rsplit_once(':').ok_or("missing port")?;
            self.scheme = scheme.to_string();
            self.host = host.to_string();
            self.port = port.parse()?;
            Ok(())
        }
    }

    impl Schema for Endpoint {
        fn fields(&mut self) -> Vec<Field<'_>> {
            // A real manifest, which the setter must shadow entirely.
            vec![Field::keyed("host", "HOST", Slot::Str(&mut self.host))]
        }

        fn setter(&mut self) -> Option<&mut dyn SetValue> {
            Some(self)
        }
    }

    /// A self-parsing newtype with no fields of its own.
    #[derive(Debug, Default, PartialEq)]
    pub struct Token(pub String);

    impl SetValue for Token {
        fn set(&mut self, value: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
            self.0 = value.to_string();
            Ok(())
        }
    }

    impl Schema for Token {
        fn fields(&mut self) -> Vec<Field<'_>> {
            Vec::new()
        }

        fn setter(&mut self) -> Option<&mut dyn SetValue> {
            Some(self)
        }
    }

    #[derive(Debug, Default, PartialEq)]
    pub struct BrokerConfig {
        pub broker: Endpoint,
        pub token: Token,
    }

    impl Schema for BrokerConfig {
        fn fields(&mut self) -> Vec<Field<'_>> {
            vec![
                Field::keyed("broker", "BROKER_URL", Slot::Nested(&mut self.broker)),
                // Key collisions are fine; both fields read the same entry.
                Field::keyed("token", "BROKER_URL", Slot::Nested(&mut self.token)),
            ]
        }
    }

    #[derive(Debug, Default, PartialEq)]
    pub struct RetryConfig {
        pub limit: Option<u32>,
    }

    impl Schema for RetryConfig {
        fn fields(&mut self) -> Vec<Field<'_>> {
            vec![Field::keyed(
                "limit",
                "LIMIT",
                Slot::Optional(self.limit.as_mut().map(|v| Box::new(Slot::U32(v)))),
            )]
        }
    }
}
