//! Object identifiers (java.rmi.server.ObjID / UID)
//!
//! An `ObjId` names an exported remote object within the exporting VM.
//! It is a 64-bit object number qualified by the `Uid` of the address
//! space that exported it.

use bytes::{Buf, BufMut};
use std::fmt;

use crate::error::{ensure_remaining, Result};

/// Address space identifier of an exporting VM
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct Uid {
    /// Number unique within the host at creation time
    pub unique: i32,
    /// Creation time in milliseconds since the epoch
    pub time: i64,
    /// Disambiguates ids created within the same millisecond
    pub count: i16,
}

impl Uid {
    /// Size of a UID in bytes
    pub const SIZE: usize = 14;

    /// Create a new UID
    pub fn new(unique: i32, time: i64, count: i16) -> Self {
        Self { unique, time, count }
    }

    /// Encode to buffer
    pub fn encode<B: BufMut>(&self, buf: &mut B) {
        buf.put_i32(self.unique);
        buf.put_i64(self.time);
        buf.put_i16(self.count);
    }

    /// Decode from buffer
    pub fn decode<B: Buf>(buf: &mut B) -> Result<Self> {
        ensure_remaining(buf, Self::SIZE)?;
        Ok(Self {
            unique: buf.get_i32(),
            time: buf.get_i64(),
            count: buf.get_i16(),
        })
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}:{:x}:{:x}", self.unique, self.time, self.count)
    }
}

/// Remote object identifier (22 bytes)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ObjId {
    /// Object number within the address space
    pub obj_num: i64,
    /// Address space the object was exported from
    pub space: Uid,
}

impl ObjId {
    /// Size of an ObjID in bytes
    pub const SIZE: usize = 8 + Uid::SIZE;

    /// Object number of the RMI registry
    pub const REGISTRY_ID: i64 = 0;
    /// Object number of the activator
    pub const ACTIVATOR_ID: i64 = 1;
    /// Object number of the distributed garbage collector
    pub const DGC_ID: i64 = 2;

    /// Create a new ObjID
    pub fn new(obj_num: i64, space: Uid) -> Self {
        Self { obj_num, space }
    }

    /// Well-known id with the zero address space
    pub fn well_known_id(obj_num: i64) -> Self {
        Self {
            obj_num,
            space: Uid::default(),
        }
    }

    /// The RMI registry's id
    pub fn registry() -> Self {
        Self::well_known_id(Self::REGISTRY_ID)
    }

    /// The activator's id
    pub fn activator() -> Self {
        Self::well_known_id(Self::ACTIVATOR_ID)
    }

    /// The DGC's id
    pub fn dgc() -> Self {
        Self::well_known_id(Self::DGC_ID)
    }

    /// Name of the well-known object this id denotes, if any
    pub fn well_known(&self) -> Option<&'static str> {
        if self.space != Uid::default() {
            return None;
        }
        match self.obj_num {
            Self::REGISTRY_ID => Some("registry"),
            Self::ACTIVATOR_ID => Some("activator"),
            Self::DGC_ID => Some("dgc"),
            _ => None,
        }
    }

    /// Encode to buffer
    pub fn encode<B: BufMut>(&self, buf: &mut B) {
        buf.put_i64(self.obj_num);
        self.space.encode(buf);
    }

    /// Decode from buffer
    pub fn decode<B: Buf>(buf: &mut B) -> Result<Self> {
        ensure_remaining(buf, Self::SIZE)?;
        let obj_num = buf.get_i64();
        let space = Uid::decode(buf)?;
        Ok(Self { obj_num, space })
    }
}

impl fmt::Debug for ObjId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjID({})", self)
    }
}

impl fmt::Display for ObjId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.space, self.obj_num)
    }
}
