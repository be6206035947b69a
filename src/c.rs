// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use super::*;

use std::ffi::{c_char, CStr, CString};
use std::mem::{forget, ManuallyDrop};

#[unsafe(no_mangle)]
pub unsafe extern "C" fn waypath_sample_building() -> *const Graph {
    building::sample_building()
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn waypath_graph_len(graph: *const Graph) -> usize {
    graph.as_ref().map(|g| g.len()).unwrap_or(0)
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn waypath_distance(a: Position, b: Position) -> f32 {
    distance(a, b)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub enum CFloorTransition {
    None = 0,
    Up = 1,
    Down = 2,
}

impl From<Option<FloorTransition>> for CFloorTransition {
    fn from(value: Option<FloorTransition>) -> Self {
        match value {
            None => CFloorTransition::None,
            Some(FloorTransition::Up) => CFloorTransition::Up,
            Some(FloorTransition::Down) => CFloorTransition::Down,
        }
    }
}

#[repr(C)]
pub struct CInstruction {
    pub from: *mut c_char,
    pub to: *mut c_char,
    pub text: *mut c_char,
    pub bearing: Bearing,
    pub segment_length: f32,
    pub floor: i32,
    pub floor_transition: CFloorTransition,
}

fn into_c_string(s: String) -> *mut c_char {
    // Strings with interior NUL bytes can't be represented and are emptied
    CString::new(s).unwrap_or_default().into_raw()
}

unsafe fn free_c_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

impl From<Instruction> for CInstruction {
    fn from(i: Instruction) -> Self {
        CInstruction {
            from: into_c_string(i.from),
            to: into_c_string(i.to),
            text: into_c_string(i.text),
            bearing: i.bearing,
            segment_length: i.segment_length,
            floor: i.floor,
            floor_transition: i.floor_transition.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub enum CPlanResultType {
    Ok = 0,
    UnknownWaypoint = 1,
    NoPathFound = 2,
    NotAdjacent = 3,
    StepLimitExceeded = 4,
    InvalidArgument = 5,
}

#[repr(C)]
pub struct CPlanResultOk {
    pub instructions: *mut CInstruction,
    pub len: u32,
    pub capacity: u32,
}

#[repr(C)]
pub union CPlanResultInner {
    pub ok: ManuallyDrop<CPlanResultOk>,
    pub unknown_waypoint: *mut c_char,
    pub empty: (),
}

#[repr(C)]
pub struct CPlanResult {
    pub inner: CPlanResultInner,
    pub type_: CPlanResultType,
}

impl CPlanResult {
    fn ok(instructions: Vec<Instruction>) -> Self {
        let mut instructions: Vec<CInstruction> =
            instructions.into_iter().map(CInstruction::from).collect();

        let ptr = instructions.as_mut_ptr();
        let len = instructions
            .len()
            .try_into()
            .expect("instruction count overflow");
        let capacity = instructions
            .capacity()
            .try_into()
            .expect("instruction capacity overflow");
        forget(instructions);

        CPlanResult {
            inner: CPlanResultInner {
                ok: ManuallyDrop::new(CPlanResultOk {
                    instructions: ptr,
                    len,
                    capacity,
                }),
            },
            type_: CPlanResultType::Ok,
        }
    }

    fn unknown_waypoint(id: String) -> Self {
        CPlanResult {
            inner: CPlanResultInner {
                unknown_waypoint: into_c_string(id),
            },
            type_: CPlanResultType::UnknownWaypoint,
        }
    }

    fn empty(type_: CPlanResultType) -> Self {
        CPlanResult {
            inner: CPlanResultInner { empty: () },
            type_,
        }
    }
}

impl From<Result<Vec<Instruction>, RouteError>> for CPlanResult {
    fn from(value: Result<Vec<Instruction>, RouteError>) -> Self {
        match value {
            Ok(instructions) => CPlanResult::ok(instructions),
            Err(RouteError::UnknownWaypoint(id)) => CPlanResult::unknown_waypoint(id),
            Err(RouteError::NoPathFound { .. }) => CPlanResult::empty(CPlanResultType::NoPathFound),
            Err(RouteError::NotAdjacent { .. }) => CPlanResult::empty(CPlanResultType::NotAdjacent),
            Err(RouteError::StepLimitExceeded) => {
                CPlanResult::empty(CPlanResultType::StepLimitExceeded)
            }
        }
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn waypath_plan(
    graph: *const Graph,
    from_id: *const c_char,
    to_id: *const c_char,
    max_steps: usize,
) -> CPlanResult {
    if from_id.is_null() || to_id.is_null() {
        return CPlanResult::empty(CPlanResultType::InvalidArgument);
    }

    match (
        graph.as_ref(),
        CStr::from_ptr(from_id).to_str(),
        CStr::from_ptr(to_id).to_str(),
    ) {
        (Some(graph), Ok(from_id), Ok(to_id)) => {
            plan_with_limit(graph, from_id, to_id, max_steps).into()
        }
        _ => CPlanResult::empty(CPlanResultType::InvalidArgument),
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn waypath_plan_result_delete(result: CPlanResult) {
    match result.type_ {
        CPlanResultType::Ok => {
            let ok = ManuallyDrop::into_inner(result.inner.ok);
            if !ok.instructions.is_null() {
                let instructions = Vec::from_raw_parts(
                    ok.instructions,
                    ok.len as usize,
                    ok.capacity as usize,
                );
                for i in instructions {
                    free_c_string(i.from);
                    free_c_string(i.to);
                    free_c_string(i.text);
                }
            }
        }

        CPlanResultType::UnknownWaypoint => free_c_string(result.inner.unknown_waypoint),

        CPlanResultType::NoPathFound
        | CPlanResultType::NotAdjacent
        | CPlanResultType::StepLimitExceeded
        | CPlanResultType::InvalidArgument => {
            // Nothing to free
        }
    }
}
