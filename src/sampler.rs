pub const NEAREST: u32 = 9728;
pub const LINEAR: u32 = 9729;
pub const NEAREST_MIPMAP_NEAREST: u32 = 9984;
pub const LINEAR_MIPMAP_NEAREST: u32 = 9985;
pub const NEAREST_MIPMAP_LINEAR: u32 = 9986;
pub const LINEAR_MIPMAP_LINEAR: u32 = 9987;

pub const CLAMP_TO_EDGE: u32 = 33071;
pub const MIRRORED_REPEAT: u32 = 33648;
pub const REPEAT: u32 = 10497;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterMode {
    NearestLike,
    LinearLike,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WrapMode {
    Clamp,
    Repeat,
}

struct TableEntry<T> {
    code: u32,
    description: &'static str,
    value: T,
}

static FILTER_TABLE: &[TableEntry<FilterMode>] = &[
    TableEntry {
        code: NEAREST,
        description: "NEAREST",
        value: FilterMode::NearestLike,
    },
    TableEntry {
        code: LINEAR,
        description: "LINEAR",
        value: FilterMode::LinearLike,
    },
    TableEntry {
        code: NEAREST_MIPMAP_NEAREST,
        description: "NEAREST_MIPMAP_NEAREST",
        value: FilterMode::NearestLike,
    },
    TableEntry {
        code: LINEAR_MIPMAP_NEAREST,
        description: "LINEAR_MIPMAP_NEAREST",
        value: FilterMode::NearestLike,
    },
    TableEntry {
        code: NEAREST_MIPMAP_LINEAR,
        description: "NEAREST_MIPMAP_LINEAR",
        value: FilterMode::LinearLike,
    },
    TableEntry {
        code: LINEAR_MIPMAP_LINEAR,
        description: "LINEAR_MIPMAP_LINEAR",
        value: FilterMode::LinearLike,
    },
];

static WRAP_TABLE: &[TableEntry<WrapMode>] = &[
    TableEntry {
        code: CLAMP_TO_EDGE,
        description: "CLAMP_TO_EDGE",
        value: WrapMode::Clamp,
    },
    TableEntry {
        code: MIRRORED_REPEAT,
        description: "MIRRORED_REPEAT",
        value: WrapMode::Repeat,
    },
    TableEntry {
        code: REPEAT,
        description: "REPEAT",
        value: WrapMode::Repeat,
    },
];

fn lookup<T>(table: &'static [TableEntry<T>], code: u32) -> Option<&'static TableEntry<T>> {
    table.iter().find(|entry| entry.code == code)
}

/// Both codes must map to the same mode, anything else degrades to `fallback`.
fn resolve_pair<T: Copy + PartialEq>(
    table: &'static [TableEntry<T>],
    first: u32,
    second: u32,
    fallback: T,
) -> T {
    match (lookup(table, first), lookup(table, second)) {
        (Some(a), Some(b)) if a.value == b.value => a.value,
        _ => fallback,
    }
}

pub fn resolve_filter(mag_filter: u32, min_filter: u32) -> FilterMode {
    resolve_pair(FILTER_TABLE, mag_filter, min_filter, FilterMode::LinearLike)
}

pub fn resolve_wrap(wrap_s: u32, wrap_t: u32) -> WrapMode {
    resolve_pair(WRAP_TABLE, wrap_s, wrap_t, WrapMode::Repeat)
}

pub fn describe_filter(code: u32) -> Option<&'static str> {
    lookup(FILTER_TABLE, code).map(|entry| entry.description)
}

pub fn describe_wrap(code: u32) -> Option<&'static str> {
    lookup(WRAP_TABLE, code).map(|entry| entry.description)
}

/// Absent codes take the glTF defaults, `LINEAR` and `REPEAT`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SamplerCodes {
    pub mag_filter: Option<u32>,
    pub min_filter: Option<u32>,
    pub wrap_s: Option<u32>,
    pub wrap_t: Option<u32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedSampler {
    pub filter: FilterMode,
    pub wrap: WrapMode,
}

impl SamplerCodes {
    pub fn resolve(&self) -> ResolvedSampler {
        ResolvedSampler {
            filter: resolve_filter(
                self.mag_filter.unwrap_or(LINEAR),
                self.min_filter.unwrap_or(LINEAR),
            ),
            wrap: resolve_wrap(
                self.wrap_s.unwrap_or(REPEAT),
                self.wrap_t.unwrap_or(REPEAT),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_pairs() {
        assert_eq!(resolve_filter(LINEAR, LINEAR), FilterMode::LinearLike);
        assert_eq!(resolve_filter(NEAREST, LINEAR), FilterMode::LinearLike);
        assert_eq!(resolve_filter(NEAREST, NEAREST), FilterMode::NearestLike);
        assert_eq!(
            resolve_filter(NEAREST, LINEAR_MIPMAP_NEAREST),
            FilterMode::NearestLike
        );
        assert_eq!(
            resolve_filter(LINEAR, NEAREST_MIPMAP_LINEAR),
            FilterMode::LinearLike
        );
    }

    #[test]
    fn unknown_filter_codes_fall_back_to_linear() {
        assert_eq!(resolve_filter(NEAREST, 1234), FilterMode::LinearLike);
        assert_eq!(resolve_filter(0, NEAREST), FilterMode::LinearLike);
        assert_eq!(resolve_filter(u32::MAX, u32::MAX), FilterMode::LinearLike);
    }

    #[test]
    fn wrap_pairs() {
        assert_eq!(resolve_wrap(REPEAT, REPEAT), WrapMode::Repeat);
        assert_eq!(resolve_wrap(CLAMP_TO_EDGE, CLAMP_TO_EDGE), WrapMode::Clamp);
        assert_eq!(resolve_wrap(CLAMP_TO_EDGE, REPEAT), WrapMode::Repeat);
        assert_eq!(resolve_wrap(MIRRORED_REPEAT, REPEAT), WrapMode::Repeat);
    }

    #[test]
    fn unknown_wrap_codes_fall_back_to_repeat() {
        assert_eq!(resolve_wrap(CLAMP_TO_EDGE, 7), WrapMode::Repeat);
        assert_eq!(resolve_wrap(7, 7), WrapMode::Repeat);
    }

    #[test]
    fn codes_default_when_absent() {
        let resolved = SamplerCodes::default().resolve();
        assert_eq!(resolved.filter, FilterMode::LinearLike);
        assert_eq!(resolved.wrap, WrapMode::Repeat);

        let clamped_nearest = SamplerCodes {
            mag_filter: Some(NEAREST),
            min_filter: Some(NEAREST_MIPMAP_NEAREST),
            wrap_s: Some(CLAMP_TO_EDGE),
            wrap_t: Some(CLAMP_TO_EDGE),
        };
        assert_eq!(
            clamped_nearest.resolve(),
            ResolvedSampler {
                filter: FilterMode::NearestLike,
                wrap: WrapMode::Clamp,
            }
        );
    }

    #[test]
    fn descriptions() {
        assert_eq!(describe_filter(9987), Some("LINEAR_MIPMAP_LINEAR"));
        assert_eq!(describe_wrap(33648), Some("MIRRORED_REPEAT"));
        assert_eq!(describe_wrap(9729), None);
    }
}
