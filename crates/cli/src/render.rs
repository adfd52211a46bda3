//! Plain-text rendering of decoded structures.
//!
//! Each ACE occupies exactly one line so that output can be filtered with
//! line-oriented tools.

use std::io::{self, Write};

use security::{Ace, Acl, SecurityDescriptor};

pub(crate) fn write_descriptor<W: Write>(out: &mut W, sd: &SecurityDescriptor) -> io::Result<()> {
    writeln!(out, "revision: {}", sd.revision())?;
    writeln!(
        out,
        "control: {:#06x} ({})",
        sd.control().as_raw(),
        sd.control()
    )?;
    match sd.owner() {
        Some(owner) => writeln!(out, "owner: {owner}")?,
        None => writeln!(out, "owner: none")?,
    }
    match sd.group() {
        Some(group) => writeln!(out, "group: {group}")?,
        None => writeln!(out, "group: none")?,
    }
    write_optional_acl(out, "sacl", sd.sacl())?;
    write_optional_acl(out, "dacl", sd.dacl())
}

fn write_optional_acl<W: Write>(out: &mut W, label: &str, acl: Option<&Acl>) -> io::Result<()> {
    match acl {
        Some(acl) => write_acl(out, label, acl),
        None => writeln!(out, "{label}: none"),
    }
}

pub(crate) fn write_acl<W: Write>(out: &mut W, label: &str, acl: &Acl) -> io::Result<()> {
    writeln!(
        out,
        "{label}: {} size={} entries={}",
        acl.revision(),
        acl.size(),
        acl.len()
    )?;
    for (index, ace) in acl.iter().enumerate() {
        write_ace(out, index, ace)?;
    }
    Ok(())
}

pub(crate) fn write_ace<W: Write>(out: &mut W, index: usize, ace: &Ace) -> io::Result<()> {
    write!(
        out,
        "  [{index}] {} flags={} mask={:#010x} rights={} trustee={}",
        ace.ace_type(),
        ace.flags(),
        ace.mask(),
        ace.rights(),
        ace.trustee()
    )?;
    if let Some(guid) = ace.object_type() {
        write!(out, " object_type={guid}")?;
    }
    if let Some(guid) = ace.inherited_object_type() {
        write!(out, " inherited_object_type={guid}")?;
    }
    if let Some(data) = ace.application_data() {
        write!(out, " application_data={}B", data.len())?;
    }
    writeln!(out)
}
