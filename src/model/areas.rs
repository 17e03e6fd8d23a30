use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AreaError {
    #[error("brain area {0} has no Left/Right designation")]
    NotLateralized(String),
    #[error("unknown brain area: {0}")]
    Unknown(String),
}

#[derive(Debug, Clone, Copy)]
pub struct AreaGroup {
    pub key: &'static str,
    pub members: &'static [&'static str],
}

const AMYGDALA: &[&str] = &["amy", "AMY", "amygdala", "Amygdala"];
const HIPPOCAMPUS: &[&str] = &["hpc", "HPC", "hippocampus", "Hippocampus"];
const OFC: &[&str] = &["orbitofrontal cortex", "ofc", "OFC"];
const ACC: &[&str] = &["anterior cingulate cortex", "acc", "ACC"];
const SMA: &[&str] = &["supplementary motor area", "SMA", "sma"];
const PRESMA: &[&str] = &["pre-supplementary motor area", "preSMA", "presma"];
const VMPFC: &[&str] = &["ventromedial prefrontal cortex", "vmPFC", "vmpfc"];
const MTL: &[&str] = &[
    "amy",
    "AMY",
    "amygdala",
    "Amygdala",
    "hpc",
    "HPC",
    "hippocampus",
    "Hippocampus",
];
const ALL: &[&str] = &[
    "amy",
    "amygdala",
    "Amygdala",
    "AMY",
    "hpc",
    "hippocampus",
    "Hippocampus",
    "HPC",
    "parahippocampal_gyrus",
    "parahippocampal_cortex",
    "PHC",
    "phc",
    "ofc",
    "orbitofrontal cortex",
    "OFC",
    "acc",
    "ACC",
    "anterior cingulate cortex",
    "dorsal_anterior_cingulate_cortex",
    "dACC",
    "sma",
    "SMA",
    "supplementary motor area",
    "presma",
    "preSMA",
    "pre-supplementary motor area",
    "pre_supplementary_motor_area",
    "vmpfc",
    "vmPFC",
    "ventromedial prefrontal cortex",
    "ventral_medial_prefrontal_cortex",
];

const AREA_GROUPS: &[AreaGroup] = &[
    AreaGroup { key: "all", members: ALL },
    AreaGroup { key: "mtl", members: MTL },
    AreaGroup { key: "amygdala", members: AMYGDALA },
    AreaGroup { key: "amy", members: AMYGDALA },
    AreaGroup { key: "hippocampus", members: HIPPOCAMPUS },
    AreaGroup { key: "hpc", members: HIPPOCAMPUS },
    AreaGroup { key: "orbitofrontal cortex", members: OFC },
    AreaGroup { key: "ofc", members: OFC },
    AreaGroup { key: "anterior cingulate cortex", members: ACC },
    AreaGroup { key: "acc", members: ACC },
    AreaGroup { key: "ACC", members: ACC },
    AreaGroup { key: "supplementary motor area", members: SMA },
    AreaGroup { key: "sma", members: SMA },
    AreaGroup { key: "presma", members: PRESMA },
    AreaGroup { key: "vmpfc", members: VMPFC },
];

// (name, upper, lower)
const ABBREVIATIONS: &[(&str, &str, &str)] = &[
    ("anterior cingulate cortex", "ACC", "acc"),
    ("dorsal_anterior_cingulate_cortex", "dACC", "dacc"),
    ("ACC", "ACC", "acc"),
    ("all", "ALL", "all"),
    ("Amygdala", "AMY", "amy"),
    ("amygdala", "AMY", "amy"),
    ("Hippocampus", "HPC", "hpc"),
    ("hippocampus", "HPC", "hpc"),
    ("orbitofrontal cortex", "OFC", "ofc"),
    ("parahippocampal_cortex", "PHC", "phc"),
    ("parahippocampal_gyrus", "PHC", "phc"),
    ("pre_supplementary_motor_area", "preSMA", "presma"),
    ("preSMA", "preSMA", "presma"),
    ("supplementary motor area", "SMA", "sma"),
    ("ventral_medial_prefrontal_cortex", "vmPFC", "vmpfc"),
    ("vmPFC", "vmPFC", "vmpfc"),
    ("RSPE", "RSPE", "rspe"),
];

pub fn remove_lateralization(name: &str) -> Result<String, AreaError> {
    if let Some(rest) = name.strip_prefix("Left ") {
        return Ok(rest.to_string());
    }
    if let Some(rest) = name.strip_prefix("Right ") {
        return Ok(rest.to_string());
    }
    Err(AreaError::NotLateralized(name.to_string()))
}

pub fn abbreviation_upper(name: &str) -> Result<&'static str, AreaError> {
    lookup(name).map(|(_, upper, _)| upper)
}

pub fn abbreviation_lower(name: &str) -> Result<&'static str, AreaError> {
    lookup(name).map(|(_, _, lower)| lower)
}

fn lookup(name: &str) -> Result<(&'static str, &'static str, &'static str), AreaError> {
    ABBREVIATIONS
        .iter()
        .find(|(n, _, _)| *n == name)
        .copied()
        .ok_or_else(|| AreaError::Unknown(name.to_string()))
}

pub fn area_members(group: &str) -> Result<&'static [&'static str], AreaError> {
    AREA_GROUPS
        .iter()
        .find(|g| g.key == group)
        .map(|g| g.members)
        .ok_or_else(|| AreaError::Unknown(group.to_string()))
}

/// Whether `name` belongs to the region group `group` (e.g. "Left amygdala" in "mtl").
pub fn area_in_group(name: &str, group: &str) -> Result<bool, AreaError> {
    let members = area_members(group)?;
    let bare = remove_lateralization(name).unwrap_or_else(|_| name.to_string());
    Ok(members.iter().any(|m| *m == bare))
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/areas.rs"]
mod tests;
