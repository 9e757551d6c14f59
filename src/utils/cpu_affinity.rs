//! CPU pinning for stable measurements.
//!
//! Pins the measuring thread to the core it is currently running on so the
//! scheduler cannot migrate it mid-measurement. Linux only; everywhere else
//! the guard is a no-op.

#[cfg(target_os = "linux")]
mod platform {
    /// Pin the current thread to the core it is running on.
    pub fn pin_to_current_core() -> Option<usize> {
        unsafe {
            let cpu = libc::sched_getcpu();
            if cpu < 0 {
                return None;
            }
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(cpu as usize, &mut set);
            if libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) == 0 {
                Some(cpu as usize)
            } else {
                None
            }
        }
    }

    /// Widen affinity back to every online core.
    pub fn unpin() -> bool {
        unsafe {
            let num_cpus = libc::sysconf(libc::_SC_NPROCESSORS_ONLN);
            if num_cpus <= 0 {
                return false;
            }
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            libc::CPU_ZERO(&mut set);
            for core in 0..num_cpus as usize {
                libc::CPU_SET(core, &mut set);
            }
            libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) == 0
        }
    }
}

#[cfg(not(target_os = "linux"))]
mod platform {
    pub fn pin_to_current_core() -> Option<usize> {
        None
    }

    pub fn unpin() -> bool {
        false
    }
}

/// RAII guard: pins on creation, unpins on drop.
pub struct CpuPinGuard {
    pinned_core: Option<usize>,
}

impl CpuPinGuard {
    pub fn new() -> Self {
        Self {
            pinned_core: platform::pin_to_current_core(),
        }
    }

    /// Core ID this thread is pinned to, if pinning succeeded.
    pub fn core_id(&self) -> Option<usize> {
        self.pinned_core
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned_core.is_some()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if self.pinned_core.is_some() {
            platform::unpin();
        }
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_guard_cycle() {
        let guard = CpuPinGuard::new();
        if guard.is_pinned() {
            assert!(guard.core_id().is_some());
        }
        drop(guard);
        // Thread is unpinned (or was never pinned) here
    }
}
