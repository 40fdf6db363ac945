use super::DescError;
use std::fmt;
use std::sync::Arc;

/// The name and help text shared by every metric.
///
/// Descriptors are reference-counted so that a metric (or whatever registers it) may clone
/// its descriptor without copying the strings.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Desc(Arc<InnerDesc>);

#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
struct InnerDesc {
    name: String,
    help: String,
}

impl Desc {
    /// Builds a descriptor, checking `name` against `[a-zA-Z_:][a-zA-Z0-9_:]*`.
    pub fn new<N, H>(name: N, help: H) -> Result<Desc, DescError>
    where
        N: Into<String>,
        H: Into<String>,
    {
        let name = name.into();
        validate_name(&name)?;
        Ok(Desc(Arc::new(InnerDesc {
            name,
            help: help.into(),
        })))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn help(&self) -> &str {
        &self.0.help
    }
}

impl fmt::Display for Desc {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn validate_name(name: &str) -> Result<(), DescError> {
    if name.is_empty() {
        return Err(DescError::EmptyName);
    }
    for (position, b) in name.bytes().enumerate() {
        let ok = match b {
            b'a'..=b'z' | b'A'..=b'Z' | b'_' | b':' => true,
            b'0'..=b'9' => position > 0,
            _ => false,
        };
        if !ok {
            return Err(DescError::InvalidName {
                name: name.to_owned(),
                position,
            });
        }
    }
    Ok(())
}
