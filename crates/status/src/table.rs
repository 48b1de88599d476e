//! Built-in status table.
//!
//! Sorted by status value. A status listed twice resolves to its first
//! record; the later one is kept as a documented alias. A `dos_error` above
//! `0xFFFF` is the facility's HRESULT-shaped error code, or the status
//! itself where no Win32 code exists.

use crate::record::StatusRecord;

pub(crate) static STATUS_TABLE: &[StatusRecord] = &[
	StatusRecord::new(0x0000_0000, 0, 0, "STATUS_SUCCESS"),
	StatusRecord::new(0x0000_0000, 0, 0, "STATUS_WAIT_0"),
	StatusRecord::new(0x0000_0001, 731, 0, "STATUS_WAIT_1"),
	StatusRecord::new(0x0000_0002, 732, 0, "STATUS_WAIT_2"),
	StatusRecord::new(0x0000_0003, 733, 0, "STATUS_WAIT_3"),
	StatusRecord::new(0x0000_003F, 734, 0, "STATUS_WAIT_63"),
	StatusRecord::new(0x0000_0080, 735, 0, "STATUS_ABANDONED"),
	StatusRecord::new(0x0000_0080, 735, 0, "STATUS_ABANDONED_WAIT_0"),
	StatusRecord::new(0x0000_00BF, 736, 0, "STATUS_ABANDONED_WAIT_63"),
	StatusRecord::new(0x0000_00C0, 737, 0, "STATUS_USER_APC"),
	StatusRecord::new(0x0000_00FF, 0, 0, "The requested action was completed by an earlier operation."), // STATUS_ALREADY_COMPLETE
	StatusRecord::new(0x0000_0100, 738, 0, "STATUS_KERNEL_APC"),
	StatusRecord::new(0x0000_0101, 739, 0, "STATUS_ALERTED"),
	StatusRecord::new(0x0000_0102, 1460, 138, "STATUS_TIMEOUT"),
	StatusRecord::new(0x0000_0103, 997, 112, "The operation that was requested is pending completion."), // STATUS_PENDING
	StatusRecord::new(0x0000_0104, 741, 0, "A reparse should be performed by the Object Manager since the name of the file resulted in a symbolic link."), // STATUS_REPARSE
	StatusRecord::new(0x0000_0105, 234, 0, "Returned by enumeration APIs to indicate more information is available to successive calls."), // STATUS_MORE_ENTRIES
	StatusRecord::new(0x0000_0106, 1300, 0, "Indicates not all privileges or groups referenced are assigned to the caller.\nThis allows, for example, all privileges to be disabled without having to know exactly which privileges are assigned."), // STATUS_NOT_ALL_ASSIGNED
	StatusRecord::new(0x0000_0107, 1301, 0, "Some of the information to be translated has not been translated."), // STATUS_SOME_NOT_MAPPED
	StatusRecord::new(0x0000_0108, 742, 0, "An open/create operation completed while an oplock break is underway."), // STATUS_OPLOCK_BREAK_IN_PROGRESS
	StatusRecord::new(0x0000_0109, 743, 0, "A new volume has been mounted by a file system."), // STATUS_VOLUME_MOUNTED
	StatusRecord::new(0x0000_010A, 744, 0, "This success level status indicates that the transaction state already exists for the registry sub-tree, but that a transaction commit was previously aborted.\nThe commit has now been completed."), // STATUS_RXACT_COMMITTED
	StatusRecord::new(0x0000_010B, 745, 0, "This indicates that a notify change request has been completed due to closing the handle which made the notify change request."), // STATUS_NOTIFY_CLEANUP
	StatusRecord::new(0x0000_010C, 1022, 0, "This indicates that a notify change request is being completed and that the information is not being returned in the caller's buffer.\nThe caller now needs to enumerate the files to find the changes."), // STATUS_NOTIFY_ENUM_DIR
	StatusRecord::new(0x0000_010D, 1302, 0, "{No Quotas}\nNo system quota limits are specifically set for this account."), // STATUS_NO_QUOTAS_FOR_ACCOUNT
	StatusRecord::new(0x0000_010E, 746, 0, "{Connect Failure on Primary Transport}\nAn attempt was made to connect to the remote server %hs on the primary transport, but the connection failed.\nThe computer WAS able to connect on a secondary transport."), // STATUS_PRIMARY_TRANSPORT_CONNECT_FAILED
	StatusRecord::new(0x0000_0110, 747, 0, "Page fault was a transition fault."), // STATUS_PAGE_FAULT_TRANSITION
	StatusRecord::new(0x0000_0111, 748, 0, "Page fault was a demand zero fault."), // STATUS_PAGE_FAULT_DEMAND_ZERO
	StatusRecord::new(0x0000_0112, 749, 0, "Page fault was a demand zero fault."), // STATUS_PAGE_FAULT_COPY_ON_WRITE
	StatusRecord::new(0x0000_0113, 750, 0, "Page fault was a demand zero fault."), // STATUS_PAGE_FAULT_GUARD_PAGE
	StatusRecord::new(0x0000_0114, 751, 0, "Page fault was satisfied by reading from a secondary storage device."), // STATUS_PAGE_FAULT_PAGING_FILE
	StatusRecord::new(0x0000_0115, 752, 0, "Cached page was locked during operation."), // STATUS_CACHE_PAGE_LOCKED
	StatusRecord::new(0x0000_0116, 753, 0, "Crash dump exists in paging file."), // STATUS_CRASH_DUMP
	StatusRecord::new(0x0000_0117, 754, 0, "Specified buffer contains all zeros."), // STATUS_BUFFER_ALL_ZEROS
	StatusRecord::new(0x0000_0118, 755, 0, "A reparse should be performed by the Object Manager since the name of the file resulted in a symbolic link."), // STATUS_REPARSE_OBJECT
	StatusRecord::new(0x0000_0119, 756, 0, "The device has succeeded a query-stop and its resource requirements have changed."), // STATUS_RESOURCE_REQUIREMENTS_CHANGED
	StatusRecord::new(0x0000_0120, 757, 0, "The translator has translated these resources into the global space and no further translations should be performed."), // STATUS_TRANSLATION_COMPLETE
	StatusRecord::new(0x0000_0121, 1922, 0, "The directory service evaluated group memberships locally, as it was unable to contact a global catalog server."), // STATUS_DS_MEMBERSHIP_EVALUATED_LOCALLY
	StatusRecord::new(0x0000_0122, 758, 0, "A process being terminated has no threads to terminate."), // STATUS_NOTHING_TO_TERMINATE
	StatusRecord::new(0x0000_0123, 759, 0, "The specified process is not part of a job."), // STATUS_PROCESS_NOT_IN_JOB
	StatusRecord::new(0x0000_0124, 760, 0, "The specified process is part of a job."), // STATUS_PROCESS_IN_JOB
	StatusRecord::new(0x0000_0125, 761, 0, "{Volume Shadow Copy Service}\nThe system is now ready for hibernation."), // STATUS_VOLSNAP_HIBERNATE_READY
	StatusRecord::new(0x0000_0126, 762, 0, "A file system or file system filter driver has successfully completed an FsFilter operation."), // STATUS_FSFILTER_OP_COMPLETED_SUCCESSFULLY
	StatusRecord::new(0x0000_0127, 763, 0, "The specified interrupt vector was already connected."), // STATUS_INTERRUPT_VECTOR_ALREADY_CONNECTED
	StatusRecord::new(0x0000_0128, 764, 0, "The specified interrupt vector is still connected."), // STATUS_INTERRUPT_STILL_CONNECTED
	StatusRecord::new(0x0000_0129, 0, 0, "The current process is a cloned process."), // STATUS_PROCESS_CLONED
	StatusRecord::new(0x0000_012A, 0, 0, "The file was locked and all users of the file can only read."), // STATUS_FILE_LOCKED_WITH_ONLY_READERS
	StatusRecord::new(0x0000_012B, 0, 0, "The file was locked and at least one user of the file can write."), // STATUS_FILE_LOCKED_WITH_WRITERS
	StatusRecord::new(0x0000_0202, 6707, 0, "The specified ResourceManager made no changes or updates to the resource under this transaction."), // STATUS_RESOURCEMANAGER_READ_ONLY
	StatusRecord::new(0x0000_0367, 765, 0, "An operation is blocked waiting for an oplock."), // STATUS_WAIT_FOR_OPLOCK

	StatusRecord::new(0x0001_0001, 766, 0, "Debugger handled exception."), // DBG_EXCEPTION_HANDLED
	StatusRecord::new(0x0001_0002, 767, 0, "Debugger continued."), // DBG_CONTINUE

	StatusRecord::new(0x001C_0001, 0x001C_0001, 0, "The IO was completed by a filter."), // STATUS_FLT_IO_COMPLETE

	StatusRecord::new(0x4000_0000, 183, 17, "{Object Exists}\nAn attempt was made to create an object and the object name already existed."), // STATUS_OBJECT_NAME_EXISTS
	StatusRecord::new(0x4000_0001, 699, 0, "{Thread Suspended}\nA thread termination occurred while the thread was suspended. The thread was resumed, and termination proceeded."), // STATUS_THREAD_WAS_SUSPENDED
	StatusRecord::new(0x4000_0002, 1303, 0, "{Working Set Range Error}\nAn attempt was made to set the working set minimum or maximum to values which are outside of the allowable range."), // STATUS_WORKING_SET_LIMIT_RANGE
	StatusRecord::new(0x4000_0003, 700, 0, "{Image Relocated}\nAn image file could not be mapped at the address specified in the image file. Local fixups must be performed on this image."), // STATUS_IMAGE_NOT_AT_BASE
	StatusRecord::new(0x4000_0004, 701, 0, "This informational level status indicates that a specified registry sub-tree transaction state did not yet exist and had to be created."), // STATUS_RXACT_STATE_CREATED
	StatusRecord::new(0x4000_0005, 702, 0, "{Segment Load}\nA virtual DOS machine (VDM) is loading, unloading, or moving an MS-DOS or Win16 program segment image.\nAn exception is raised so a debugger can load, unload or track symbols and breakpoints within these 16-bit segments."), // STATUS_SEGMENT_NOTIFICATION
	StatusRecord::new(0x4000_0006, 1303, 0, "{Local Session Key}\nA user session key was requested for a local RPC connection. The session key returned is a constant value and not unique to this connection."), // STATUS_LOCAL_USER_SESSION_KEY
	StatusRecord::new(0x4000_0007, 703, 0, "{Invalid Current Directory}\nThe process cannot switch to the startup current directory %hs.\nSelect OK to set current directory to %hs, or select CANCEL to exit."), // STATUS_BAD_CURRENT_DIRECTORY
	StatusRecord::new(0x4000_0008, 1120, 0, "{Serial IOCTL Complete}\nA serial I/O operation was completed by another write to a serial port.\n(The IOCTL_SERIAL_XOFF_COUNTER reached zero.)"), // STATUS_SERIAL_MORE_WRITES
	StatusRecord::new(0x4000_0009, 1014, 0, "{Registry Recovery}\nOne of the files containing the system's Registry data had to be recovered by use of a log or alternate copy.\nThe recovery was successful."), // STATUS_REGISTRY_RECOVERED
	StatusRecord::new(0x4000_000A, 704, 0, "{Redundant Read}\nTo satisfy a read request, the NT fault-tolerant file system successfully read the requested data from a redundant copy.\nThis was done because the file system encountered a failure on a member of the fault-tolerant volume, but was unable to reassign the failing area of the device."), // STATUS_FT_READ_RECOVERY_FROM_BACKUP
	StatusRecord::new(0x4000_000B, 705, 0, "{Redundant Write}\nTo satisfy a write request, the NT fault-tolerant file system successfully wrote a redundant copy of the information.\nThis was done because the file system encountered a failure on a member of the fault-tolerant volume, but was not able to reassign the failing area of the device."), // STATUS_FT_WRITE_RECOVERY
	StatusRecord::new(0x4000_000C, 1121, 0, "{Serial IOCTL Timeout}\nA serial I/O operation completed because the time-out period expired.\n(The IOCTL_SERIAL_XOFF_COUNTER had not reached zero.)"), // STATUS_SERIAL_COUNTER_TIMEOUT
	StatusRecord::new(0x4000_000D, 1304, 0, "{Password Too Complex}\nThe Windows password is too complex to be converted to a LAN Manager password.\nThe LAN Manager password returned is a NULL string."), // STATUS_NULL_LM_PASSWORD
	StatusRecord::new(0x4000_000E, 706, 0, "{Machine Type Mismatch}\nThe image file %hs is valid, but is for a machine type other than the current machine.\nSelect OK to continue, or CANCEL to fail the DLL load."), // STATUS_IMAGE_MACHINE_TYPE_MISMATCH
	StatusRecord::new(0x4000_000F, 707, 0, "{Partial Data Received}\nThe network transport returned partial data to its client. The remaining data will be sent later."), // STATUS_RECEIVE_PARTIAL
	StatusRecord::new(0x4000_0010, 708, 0, "{Expedited Data Received}\nThe network transport returned data to its client that was marked as expedited by the remote system."), // STATUS_RECEIVE_EXPEDITED
	StatusRecord::new(0x4000_0011, 709, 0, "{Partial Expedited Data Received}\nThe network transport returned partial data to its client and this data was marked as expedited by the remote system. The remaining data will be sent later."), // STATUS_RECEIVE_PARTIAL_EXPEDITED
	StatusRecord::new(0x4000_0012, 710, 0, "{TDI Event Done}\nThe TDI indication has completed successfully."), // STATUS_EVENT_DONE
	StatusRecord::new(0x4000_0013, 711, 0, "{TDI Event Pending}\nThe TDI indication has entered the pending state."), // STATUS_EVENT_PENDING
	StatusRecord::new(0x4000_0014, 712, 0, "Checking file system on %wZ"), // STATUS_CHECKING_FILE_SYSTEM
	StatusRecord::new(0x4000_0015, 713, 0, "{Fatal Application Exit}\n%hs"), // STATUS_FATAL_APP_EXIT
	StatusRecord::new(0x4000_0016, 714, 0, "The specified registry key is referenced by a predefined handle."), // STATUS_PREDEFINED_HANDLE
	StatusRecord::new(0x4000_0017, 715, 0, "{Page Unlocked}\nThe page protection of a locked page was changed to 'No Access' and the page was unlocked from memory and from the process."), // STATUS_WAS_UNLOCKED
	StatusRecord::new(0x4000_0018, 716, 0, "%hs"), // STATUS_SERVICE_NOTIFICATION
	StatusRecord::new(0x4000_0019, 717, 0, "{Page Locked}\nOne of the pages to lock was already locked."), // STATUS_WAS_LOCKED
	StatusRecord::new(0x4000_001A, 718, 0, "Application popup: %1 : %2"), // STATUS_LOG_HARD_ERROR
	StatusRecord::new(0x4000_001B, 719, 0, "STATUS_ALREADY_WIN32"),
	StatusRecord::new(0x4000_0023, 720, 0, "{Machine Type Mismatch}\nThe image file %hs is valid, but is for a machine type other than the current machine."), // STATUS_IMAGE_MACHINE_TYPE_MISMATCH_EXE
	StatusRecord::new(0x4000_0024, 721, 0, "A yield execution was performed and no thread was available to run."), // STATUS_NO_YIELD_PERFORMED
	StatusRecord::new(0x4000_0025, 722, 0, "The resumable flag to a timer API was ignored."), // STATUS_TIMER_RESUME_IGNORED
	StatusRecord::new(0x4000_0026, 723, 0, "The arbiter has deferred arbitration of these resources to its parent"), // STATUS_ARBITRATION_UNHANDLED
	StatusRecord::new(0x4000_0027, 724, 0, "The device \"%hs\" has detected a CardBus card in its slot, but the firmware on this system is not configured to allow the CardBus controller to be run in CardBus mode.\nThe operating system will currently accept only 16-bit (R2) pc-cards on this controller."), // STATUS_CARDBUS_NOT_SUPPORTED
	StatusRecord::new(0x4000_0029, 725, 0, "The CPUs in this multiprocessor system are not all the same revision level. To use all processors the operating system restricts itself to the features of the least capable processor in the system. Should problems occur with this system, contact the CPU manufacturer to see if this mix of processors is supported."), // STATUS_MP_PROCESSOR_MISMATCH
	StatusRecord::new(0x4000_002A, 726, 0, "The system was put into hibernation."), // STATUS_HIBERNATED
	StatusRecord::new(0x4000_002B, 727, 0, "The system was resumed from hibernation."), // STATUS_RESUME_HIBERNATION
	StatusRecord::new(0x4000_002C, 728, 0, "Windows has detected that the system firmware (BIOS) was updated [previous firmware date = %2, current firmware date %3]."), // STATUS_FIRMWARE_UPDATED
	StatusRecord::new(0x4000_002D, 729, 0, "A device driver is leaking locked I/O pages causing system degradation. The system has automatically enabled tracking code in order to try and catch the culprit."), // STATUS_DRIVERS_LEAKING_LOCKED_PAGES
	StatusRecord::new(0x4000_002E, 0, 0, "The ALPC message being canceled has already been retrieved from the queue on the other side."), // STATUS_MESSAGE_RETRIEVED
	StatusRecord::new(0x4000_002F, 782, 0, "The system power state is transitioning from %2 to %3."), // STATUS_SYSTEM_POWERSTATE_TRANSITION
	StatusRecord::new(0x4000_0030, 0, 0, "The receive operation was successful. Check the ALPC completion list for the received message."), // STATUS_ALPC_CHECK_COMPLETION_LIST
	StatusRecord::new(0x4000_0031, 783, 0, "The system power state is transitioning from %2 to %3 but could enter %4."), // STATUS_SYSTEM_POWERSTATE_COMPLEX_TRANSITION
	StatusRecord::new(0x4000_0032, 785, 0, "Access to %1 is monitored by policy rule %2."), // STATUS_ACCESS_AUDIT_BY_POLICY
	StatusRecord::new(0x4000_0033, 787, 0, "A valid hibernation file has been invalidated and should be abandoned."), // STATUS_ABANDON_HIBERFILE
	StatusRecord::new(0x4000_0034, 0, 0, "Business rule scripts are disabled for the calling application."), // STATUS_BIZRULES_NOT_ENABLED
	StatusRecord::new(0x4000_0294, 730, 0, "The system has awoken"), // STATUS_WAKE_SYSTEM
	StatusRecord::new(0x4000_0370, 8364, 0, "The directory service is shutting down."), // STATUS_DS_SHUTTING_DOWN

	StatusRecord::new(0x4001_0001, 689, 0, "Debugger will reply later."), // DBG_REPLY_LATER
	StatusRecord::new(0x4001_0002, 690, 0, "Debugger cannot provide handle."), // DBG_UNABLE_TO_PROVIDE_HANDLE
	StatusRecord::new(0x4001_0003, 691, 0, "Debugger terminated thread."), // DBG_TERMINATE_THREAD
	StatusRecord::new(0x4001_0004, 692, 0, "Debugger terminated process."), // DBG_TERMINATE_PROCESS
	StatusRecord::new(0x4001_0005, 693, 0, "Debugger got control C."), // DBG_CONTROL_C
	StatusRecord::new(0x4001_0006, 694, 0, "Debugger printed exception on control C."), // DBG_PRINTEXCEPTION_C
	StatusRecord::new(0x4001_0007, 695, 0, "Debugger received RIP exception."), // DBG_RIPEXCEPTION
	StatusRecord::new(0x4001_0008, 696, 0, "Debugger received control break."), // DBG_CONTROL_BREAK
	StatusRecord::new(0x4001_0009, 697, 0, "Debugger command communication exception."), // DBG_COMMAND_EXCEPTION
	StatusRecord::new(0x4001_000A, 0x4001_000A, 0, "Debugger printed exception on control C."), // DBG_PRINTEXCEPTION_WIDE_C

	StatusRecord::new(0x4002_0056, 1824, 0, "A UUID that is valid only on this computer has been allocated."), // RPC_NT_UUID_LOCAL_ONLY
	StatusRecord::new(0x4002_00AF, 1913, 0, "Some data remains to be sent in the request buffer."), // RPC_NT_SEND_INCOMPLETE

	StatusRecord::new(0x400A_0004, 0x400A_0004, 0, "The Client Drive Mapping Service has connected on Terminal Connection."), // STATUS_CTX_CDM_CONNECT
	StatusRecord::new(0x400A_0005, 0x400A_0005, 0, "The Client Drive Mapping Service has disconnected on Terminal Connection."), // STATUS_CTX_CDM_DISCONNECT

	StatusRecord::new(0x4015_000D, 0x4015_000D, 0, "A kernel mode component is releasing a reference on an activation context."), // STATUS_SXS_RELEASE_ACTIVATION_CONTEXT

	StatusRecord::new(0x4019_0034, 6821, 0, "The transactional resource manager is already consistent. Recovery is not needed."), // STATUS_RECOVERY_NOT_NEEDED
	StatusRecord::new(0x4019_0035, 6822, 0, "The transactional resource manager has already been started."), // STATUS_RM_ALREADY_STARTED

	StatusRecord::new(0x401B_00EC, 0x401B_00EC, 0, "{Video Driver Debug Report Request}\nThe video driver has requested that a debug report be collected.\n\nNo further action is required; the report is attached to the next crash dump."), // STATUS_VIDEO_DRIVER_DEBUG_REPORT_REQUEST

	StatusRecord::new(0x4023_0001, 0x0034_0001, 0, "The request will be completed later by an NDIS status indication."), // STATUS_NDIS_INDICATION_REQUIRED

	StatusRecord::new(0x8000_0001, 0x8000_0001, 0, "{EXCEPTION}\nGuard Page Exception\nA page of memory that marks the end of a data structure, such as a stack or an array, has been accessed."), // STATUS_GUARD_PAGE_VIOLATION
	StatusRecord::new(0x8000_0002, 998, 14, "{EXCEPTION}\nAlignment Fault\nA datatype misalignment was detected in a load or store instruction."), // STATUS_DATATYPE_MISALIGNMENT
	StatusRecord::new(0x8000_0003, 0x8000_0003, 0, "{EXCEPTION}\nBreakpoint\nA breakpoint has been reached."), // STATUS_BREAKPOINT
	StatusRecord::new(0x8000_0004, 0x8000_0004, 0, "{EXCEPTION}\nSingle Step\nA single step or trace operation has just been completed."), // STATUS_SINGLE_STEP
	StatusRecord::new(0x8000_0005, 234, 0, "{Buffer Overflow}\nThe data was too large to fit into the specified buffer."), // STATUS_BUFFER_OVERFLOW
	StatusRecord::new(0x8000_0006, 18, 2, "{No More Files}\nNo more files were found which match the file specification."), // STATUS_NO_MORE_FILES
	StatusRecord::new(0x8000_0007, 675, 0, "{Kernel Debugger Awakened}\nthe system debugger was awakened by an interrupt."), // STATUS_WAKE_SYSTEM_DEBUGGER
	StatusRecord::new(0x8000_000A, 676, 0, "{Handles Closed}\nHandles to objects have been automatically closed as a result of the requested operation."), // STATUS_HANDLES_CLOSED
	StatusRecord::new(0x8000_000B, 1391, 0, "{Non-Inheritable ACL}\nAn access control list (ACL) contains no components that can be inherited."), // STATUS_NO_INHERITANCE
	StatusRecord::new(0x8000_000C, 680, 0, "{GUID Substitution}\nDuring the translation of a global identifier (GUID) to a Windows security ID (SID), no administratively-defined GUID prefix was found.\nA substitute prefix was used, which will not compromise system security. However, this may provide a more restrictive access than intended."), // STATUS_GUID_SUBSTITUTION_MADE
	StatusRecord::new(0x8000_000D, 299, 0, "{Partial Copy}\nDue to protection conflicts not all the requested bytes could be copied."), // STATUS_PARTIAL_COPY
	StatusRecord::new(0x8000_000E, 28, 13, "{Out of Paper}\nThe printer is out of paper."), // STATUS_DEVICE_PAPER_EMPTY
	StatusRecord::new(0x8000_000F, 21, 13, "{Device Power Is Off}\nThe printer power has been turned off."), // STATUS_DEVICE_POWERED_OFF
	StatusRecord::new(0x8000_0010, 21, 13, "{Device Offline}\nThe printer has been taken offline."), // STATUS_DEVICE_OFF_LINE
	StatusRecord::new(0x8000_0011, 170, 16, "{Device Busy}\nThe device is currently busy."), // STATUS_DEVICE_BUSY
	StatusRecord::new(0x8000_0012, 259, 0, "{No More EAs}\nNo more extended attributes (EAs) were found for the file."), // STATUS_NO_MORE_EAS
	StatusRecord::new(0x8000_0013, 254, 0, "{Illegal EA}\nThe specified extended attribute (EA) name contains at least one illegal character."), // STATUS_INVALID_EA_NAME
	StatusRecord::new(0x8000_0014, 255, 0, "{Inconsistent EA List}\nThe extended attribute (EA) list is inconsistent."), // STATUS_EA_LIST_INCONSISTENT
	StatusRecord::new(0x8000_0015, 255, 0, "{Invalid EA Flag}\nAn invalid extended attribute (EA) flag was set."), // STATUS_INVALID_EA_FLAG
	StatusRecord::new(0x8000_0016, 1110, 5, "{Verifying Disk}\nThe media has changed and a verify operation is in progress so no reads or writes may be performed to the device, except those used in the verify operation."), // STATUS_VERIFY_REQUIRED
	StatusRecord::new(0x8000_0017, 677, 0, "{Too Much Information}\nThe specified access control list (ACL) contained more information than was expected."), // STATUS_EXTRANEOUS_INFORMATION
	StatusRecord::new(0x8000_0018, 678, 0, "This warning level status indicates that the transaction state already exists for the registry sub-tree, but that a transaction commit was previously aborted.\nThe commit has NOT been completed, but has not been rolled back either (so it may still be committed if desired)."), // STATUS_RXACT_COMMIT_NECESSARY
	StatusRecord::new(0x8000_001A, 259, 0, "{No More Entries}\nNo more entries are available from an enumeration operation."), // STATUS_NO_MORE_ENTRIES
	StatusRecord::new(0x8000_001B, 1101, 5, "{Filemark Found}\nA filemark was detected."), // STATUS_FILEMARK_DETECTED
	StatusRecord::new(0x8000_001C, 1110, 5, "{Media Changed}\nThe media may have changed."), // STATUS_MEDIA_CHANGED
	StatusRecord::new(0x8000_001D, 1111, 5, "{I/O Bus Reset}\nAn I/O bus reset was detected."), // STATUS_BUS_RESET
	StatusRecord::new(0x8000_001E, 1100, 28, "{End of Media}\nThe end of the media was encountered."), // STATUS_END_OF_MEDIA
	StatusRecord::new(0x8000_001F, 1102, 5, "Beginning of tape or partition has been detected."), // STATUS_BEGINNING_OF_MEDIA
	StatusRecord::new(0x8000_0020, 679, 0, "{Media Changed}\nThe media may have changed."), // STATUS_MEDIA_CHECK
	StatusRecord::new(0x8000_0021, 1103, 5, "A tape access reached a setmark."), // STATUS_SETMARK_DETECTED
	StatusRecord::new(0x8000_0022, 1104, 5, "During a tape access, the end of the data written is reached."), // STATUS_NO_DATA_DETECTED
	StatusRecord::new(0x8000_0023, 1794, 0, "The redirector is in use and cannot be unloaded."), // STATUS_REDIRECTOR_HAS_OPEN_HANDLES
	StatusRecord::new(0x8000_0024, 1811, 0, "The server is in use and cannot be unloaded."), // STATUS_SERVER_HAS_OPEN_HANDLES
	StatusRecord::new(0x8000_0025, 0, 0, "The specified connection has already been disconnected."), // STATUS_ALREADY_DISCONNECTED
	StatusRecord::new(0x8000_0026, 682, 0, "A long jump has been executed."), // STATUS_LONGJUMP
	StatusRecord::new(0x8000_0027, 0, 0, "A cleaner cartridge is present in the tape library."), // STATUS_CLEANER_CARTRIDGE_INSTALLED
	StatusRecord::new(0x8000_0028, 683, 0, "The Plug and Play query operation was not successful."), // STATUS_PLUGPLAY_QUERY_VETOED
	StatusRecord::new(0x8000_0029, 684, 0, "A frame consolidation has been executed."), // STATUS_UNWIND_CONSOLIDATE
	StatusRecord::new(0x8000_002A, 685, 0, "{Registry Hive Recovered}\nRegistry hive (file):\n%hs\nwas corrupted and it has been recovered. Some data might have been lost."), // STATUS_REGISTRY_HIVE_RECOVERED
	StatusRecord::new(0x8000_002B, 686, 0, "The application is attempting to run executable code from the module %hs. This may be insecure. An alternative, %hs, is available. Should the application use the secure module %hs?"), // STATUS_DLL_MIGHT_BE_INSECURE
	StatusRecord::new(0x8000_002C, 687, 0, "The application is loading executable code from the module %hs. This is secure, but may be incompatible with previous releases of the operating system. An alternative, %hs, is available. Should the application use the secure module %hs?"), // STATUS_DLL_MIGHT_BE_INCOMPATIBLE
	StatusRecord::new(0x8000_002D, 681, 0, "The create operation stopped after reaching a symbolic link."), // STATUS_STOPPED_ON_SYMLINK
	StatusRecord::new(0x8000_002E, 801, 0, "An oplock of the requested level cannot be granted. An oplock of a lower level may be available."), // STATUS_CANNOT_GRANT_REQUESTED_OPLOCK
	StatusRecord::new(0x8000_002F, 804, 0, "{No ACE Condition}\nThe specified access control entry (ACE) does not contain a condition."), // STATUS_NO_ACE_CONDITION
	StatusRecord::new(0x8000_0288, 1165, 0, "The device has indicated that cleaning is necessary."), // STATUS_DEVICE_REQUIRES_CLEANING
	StatusRecord::new(0x8000_0289, 1166, 0, "The device has indicated that its door is open. Further operations require it closed and secured."), // STATUS_DEVICE_DOOR_OPEN
	StatusRecord::new(0x8000_0803, 0, 0, "Windows discovered a corruption in the file \"%hs\".\nThis file has now been repaired.\nPlease check if any data in the file was lost because of the corruption."), // STATUS_DATA_LOST_REPAIR

	StatusRecord::new(0x8001_0001, 688, 0, "Debugger did not handle the exception."), // DBG_EXCEPTION_NOT_HANDLED

	StatusRecord::new(0x8013_0001, 5064, 0, "The cluster node is already up."), // STATUS_CLUSTER_NODE_ALREADY_UP
	StatusRecord::new(0x8013_0002, 5065, 0, "The cluster node is already down."), // STATUS_CLUSTER_NODE_ALREADY_DOWN
	StatusRecord::new(0x8013_0003, 5066, 0, "The cluster network is already online."), // STATUS_CLUSTER_NETWORK_ALREADY_ONLINE
	StatusRecord::new(0x8013_0004, 5067, 0, "The cluster network is already offline."), // STATUS_CLUSTER_NETWORK_ALREADY_OFFLINE
	StatusRecord::new(0x8013_0005, 5068, 0, "The cluster node is already a member of the cluster."), // STATUS_CLUSTER_NODE_ALREADY_MEMBER

	StatusRecord::new(0x801B_00EB, 0x801B_00EB, 0, "{Display Driver Stopped Responding}\nThe %hs display driver has stopped working normally. Save your work and reboot the system to restore full display functionality.\nThe next time you reboot the machine a dialog will be displayed giving you a chance to report this failure to Microsoft."), // STATUS_VIDEO_HUNG_DISPLAY_DRIVER_THREAD

	StatusRecord::new(0x801C_0001, 122, 34, "The buffer is too small to contain the entry. No information has been written to the buffer."), // STATUS_FLT_BUFFER_TOO_SMALL

	StatusRecord::new(0x8037_0001, 0x8037_0001, 0, "A virtual machine is running with its memory allocated across multiple NUMA nodes. This does not indicate a problem unless the performance of your virtual machine is unusually slow. If you are experiencing performance problems, you may need to modify the NUMA configuration."), // STATUS_VID_REMOTE_NODE_PARENT_GPA_PAGES_USED

	StatusRecord::new(0x8038_0001, 0x8038_0001, 0, "The regeneration operation was not able to copy all data from the active plexes due to bad sectors."), // STATUS_VOLMGR_INCOMPLETE_REGENERATION
	StatusRecord::new(0x8038_0002, 0x8038_0002, 0, "One or more disks were not fully migrated to the target pack. They may or may not require reimport after fixing the hardware problems."), // STATUS_VOLMGR_INCOMPLETE_DISK_MIGRATION

	StatusRecord::new(0xC000_0001, 31, 13, "{Operation Failed}\nThe requested operation was unsuccessful."), // STATUS_UNSUCCESSFUL
	StatusRecord::new(0xC000_0002, 1, 22, "{Not Implemented}\nThe requested operation is not implemented."), // STATUS_NOT_IMPLEMENTED
	StatusRecord::new(0xC000_0003, 87, 22, "{Invalid Parameter}\nThe specified information class is not a valid information class for the specified object."), // STATUS_INVALID_INFO_CLASS
	StatusRecord::new(0xC000_0004, 24, 13, "The specified information record length does not match the length required for the specified information class."), // STATUS_INFO_LENGTH_MISMATCH
	StatusRecord::new(0xC000_0005, 998, 14, "The instruction at 0x%08lx referenced memory at 0x%08lx. The memory could not be %s."), // STATUS_ACCESS_VIOLATION
	StatusRecord::new(0xC000_0006, 999, 5, "The instruction at 0x%08lx referenced memory at 0x%08lx. The required data was not placed into memory because of an I/O error status of 0x%08lx."), // STATUS_IN_PAGE_ERROR
	StatusRecord::new(0xC000_0007, 1455, 12, "The pagefile quota for the process has been exhausted."), // STATUS_PAGEFILE_QUOTA
	StatusRecord::new(0xC000_0008, 6, 9, "An invalid HANDLE was specified."), // STATUS_INVALID_HANDLE
	StatusRecord::new(0xC000_0009, 1001, 0, "An invalid initial stack was specified in a call to NtCreateThread."), // STATUS_BAD_INITIAL_STACK
	StatusRecord::new(0xC000_000A, 193, 8, "An invalid initial start address was specified in a call to NtCreateThread."), // STATUS_BAD_INITIAL_PC
	StatusRecord::new(0xC000_000B, 87, 22, "An invalid Client ID was specified."), // STATUS_INVALID_CID
	StatusRecord::new(0xC000_000C, 541, 0, "An attempt was made to cancel or set a timer that has an associated APC and the subject thread is not the thread that originally set the timer with an associated APC routine."), // STATUS_TIMER_NOT_CANCELED
	StatusRecord::new(0xC000_000D, 87, 22, "An invalid parameter was passed to a service or function."), // STATUS_INVALID_PARAMETER
	StatusRecord::new(0xC000_000E, 2, 2, "A device which does not exist was specified."), // STATUS_NO_SUCH_DEVICE
	StatusRecord::new(0xC000_000F, 2, 2, "{File Not Found}\nThe file %hs does not exist."), // STATUS_NO_SUCH_FILE
	StatusRecord::new(0xC000_0010, 1, 22, "The specified request is not a valid operation for the target device."), // STATUS_INVALID_DEVICE_REQUEST
	StatusRecord::new(0xC000_0011, 38, 0, "The end-of-file marker has been reached. There is no valid data in the file beyond this marker."), // STATUS_END_OF_FILE
	StatusRecord::new(0xC000_0012, 34, 13, "{Wrong Volume}\nThe wrong volume is in the drive.\nPlease insert volume %hs into drive %hs."), // STATUS_WRONG_VOLUME
	StatusRecord::new(0xC000_0013, 21, 13, "{No Disk}\nThere is no disk in the drive.\nPlease insert a disk into drive %hs."), // STATUS_NO_MEDIA_IN_DEVICE
	StatusRecord::new(0xC000_0014, 1785, 0, "{Unknown Disk Format}\nThe disk in drive %hs is not formatted properly.\nPlease check the disk, and reformat if necessary."), // STATUS_UNRECOGNIZED_MEDIA
	StatusRecord::new(0xC000_0015, 27, 13, "{Sector Not Found}\nThe specified sector does not exist."), // STATUS_NONEXISTENT_SECTOR
	StatusRecord::new(0xC000_0016, 234, 0, "{Still Busy}\nThe specified I/O request packet (IRP) cannot be disposed of because the I/O operation is not complete."), // STATUS_MORE_PROCESSING_REQUIRED
	StatusRecord::new(0xC000_0017, 8, 12, "{Not Enough Quota}\nNot enough virtual memory or paging file quota is available to complete the specified operation."), // STATUS_NO_MEMORY
	StatusRecord::new(0xC000_0018, 487, 14, "{Conflicting Address Range}\nThe specified address range conflicts with the address space."), // STATUS_CONFLICTING_ADDRESSES
	StatusRecord::new(0xC000_0019, 487, 14, "Address range to unmap is not a mapped view."), // STATUS_NOT_MAPPED_VIEW
	StatusRecord::new(0xC000_001A, 87, 22, "Virtual memory cannot be freed."), // STATUS_UNABLE_TO_FREE_VM
	StatusRecord::new(0xC000_001B, 87, 22, "Specified section cannot be deleted."), // STATUS_UNABLE_TO_DELETE_SECTION
	StatusRecord::new(0xC000_001C, 1, 22, "An invalid system service was specified in a system service call."), // STATUS_INVALID_SYSTEM_SERVICE
	StatusRecord::new(0xC000_001D, 0xC000_001D, 0, "{EXCEPTION}\nIllegal Instruction\nAn attempt was made to execute an illegal instruction."), // STATUS_ILLEGAL_INSTRUCTION
	StatusRecord::new(0xC000_001E, 5, 13, "{Invalid Lock Sequence}\nAn attempt was made to execute an invalid lock sequence."), // STATUS_INVALID_LOCK_SEQUENCE
	StatusRecord::new(0xC000_001F, 5, 13, "{Invalid Mapping}\nAn attempt was made to create a view for a section which is bigger than the section."), // STATUS_INVALID_VIEW_SIZE
	StatusRecord::new(0xC000_0020, 193, 8, "{Bad File}\nThe attributes of the specified mapping file for a section of memory cannot be read."), // STATUS_INVALID_FILE_FOR_SECTION
	StatusRecord::new(0xC000_0021, 5, 13, "{Already Committed}\nThe specified address range is already committed."), // STATUS_ALREADY_COMMITTED
	StatusRecord::new(0xC000_0022, 5, 13, "{Access Denied}\nA process has requested access to an object, but has not been granted those access rights."), // STATUS_ACCESS_DENIED
	StatusRecord::new(0xC000_0023, 122, 34, "{Buffer Too Small}\nThe buffer is too small to contain the entry. No information has been written to the buffer."), // STATUS_BUFFER_TOO_SMALL
	StatusRecord::new(0xC000_0024, 6, 9, "{Wrong Type}\nThere is a mismatch between the type of object required by the requested operation and the type of object that is specified in the request."), // STATUS_OBJECT_TYPE_MISMATCH
	StatusRecord::new(0xC000_0025, 0xC000_0025, 0, "{EXCEPTION}\nCannot Continue\nWindows cannot continue from this exception."), // STATUS_NONCONTINUABLE_EXCEPTION
	StatusRecord::new(0xC000_0026, 0xC000_0026, 0, "An invalid exception disposition was returned by an exception handler."), // STATUS_INVALID_DISPOSITION
	StatusRecord::new(0xC000_0027, 542, 0, "Unwind exception code."), // STATUS_UNWIND
	StatusRecord::new(0xC000_0028, 543, 0, "An invalid or unaligned stack was encountered during an unwind operation."), // STATUS_BAD_STACK
	StatusRecord::new(0xC000_0029, 544, 0, "An invalid unwind target was encountered during an unwind operation."), // STATUS_INVALID_UNWIND_TARGET
	StatusRecord::new(0xC000_002A, 158, 13, "An attempt was made to unlock a page of memory which was not locked."), // STATUS_NOT_LOCKED
	StatusRecord::new(0xC000_002B, 1117, 5, "Device parity error on I/O operation."), // STATUS_PARITY_ERROR
	StatusRecord::new(0xC000_002C, 487, 14, "An attempt was made to decommit uncommitted virtual memory."), // STATUS_UNABLE_TO_DECOMMIT_VM
	StatusRecord::new(0xC000_002D, 487, 14, "An attempt was made to change the attributes on memory that has not been committed."), // STATUS_NOT_COMMITTED
	StatusRecord::new(0xC000_002E, 545, 0, "Invalid Object Attributes specified to NtCreatePort or invalid Port Attributes specified to NtConnectPort"), // STATUS_INVALID_PORT_ATTRIBUTES
	StatusRecord::new(0xC000_002F, 546, 0, "Length of message passed to NtRequestPort or NtRequestWaitReplyPort was longer than the maximum message allowed by the port."), // STATUS_PORT_MESSAGE_TOO_LONG
	StatusRecord::new(0xC000_0030, 87, 22, "An invalid combination of parameters was specified."), // STATUS_INVALID_PARAMETER_MIX
	StatusRecord::new(0xC000_0031, 547, 0, "An attempt was made to lower a quota limit below the current usage."), // STATUS_INVALID_QUOTA_LOWER
	StatusRecord::new(0xC000_0032, 1393, 5, "{Corrupt Disk}\nThe file system structure on the disk is corrupt and unusable.\nPlease run the Chkdsk utility on the volume %hs."), // STATUS_DISK_CORRUPT_ERROR
	StatusRecord::new(0xC000_0033, 123, 22, "Object Name invalid."), // STATUS_OBJECT_NAME_INVALID
	StatusRecord::new(0xC000_0034, 2, 2, "Object Name not found."), // STATUS_OBJECT_NAME_NOT_FOUND
	StatusRecord::new(0xC000_0035, 183, 17, "Object Name already exists."), // STATUS_OBJECT_NAME_COLLISION
	StatusRecord::new(0xC000_0037, 6, 9, "Attempt to send a message to a disconnected communication port."), // STATUS_PORT_DISCONNECTED
	StatusRecord::new(0xC000_0038, 548, 0, "An attempt was made to attach to a device that was already attached to another device."), // STATUS_DEVICE_ALREADY_ATTACHED
	StatusRecord::new(0xC000_0039, 161, 2, "Object Path Component was not a directory object."), // STATUS_OBJECT_PATH_INVALID
	StatusRecord::new(0xC000_003A, 3, 2, "{Path Not Found}\nThe path %hs does not exist."), // STATUS_OBJECT_PATH_NOT_FOUND
	StatusRecord::new(0xC000_003B, 161, 2, "Object Path Component was not a directory object."), // STATUS_OBJECT_PATH_SYNTAX_BAD
	StatusRecord::new(0xC000_003C, 1117, 5, "{Data Overrun}\nA data overrun error occurred."), // STATUS_DATA_OVERRUN
	StatusRecord::new(0xC000_003D, 1117, 5, "{Data Late}\nA data late error occurred."), // STATUS_DATA_LATE_ERROR
	StatusRecord::new(0xC000_003E, 23, 13, "{Data Error}\nAn error in reading or writing data occurred."), // STATUS_DATA_ERROR
	StatusRecord::new(0xC000_003F, 23, 13, "{Bad CRC}\nA cyclic redundancy check (CRC) checksum error occurred."), // STATUS_CRC_ERROR
	StatusRecord::new(0xC000_0040, 8, 12, "{Section Too Large}\nThe specified section is too big to map the file."), // STATUS_SECTION_TOO_BIG
	StatusRecord::new(0xC000_0041, 5, 13, "The NtConnectPort request is refused."), // STATUS_PORT_CONNECTION_REFUSED
	StatusRecord::new(0xC000_0042, 6, 9, "The type of port handle is invalid for the operation requested."), // STATUS_INVALID_PORT_HANDLE
	StatusRecord::new(0xC000_0043, 32, 13, "A file cannot be opened because the share access flags are incompatible."), // STATUS_SHARING_VIOLATION
	StatusRecord::new(0xC000_0044, 1816, 12, "Insufficient quota exists to complete the operation"), // STATUS_QUOTA_EXCEEDED
	StatusRecord::new(0xC000_0045, 87, 22, "The specified page protection was not valid."), // STATUS_INVALID_PAGE_PROTECTION
	StatusRecord::new(0xC000_0046, 288, 1, "An attempt to release a mutant object was made by a thread that was not the owner of the mutant object."), // STATUS_MUTANT_NOT_OWNED
	StatusRecord::new(0xC000_0047, 298, 0, "An attempt was made to release a semaphore such that its maximum count would have been exceeded."), // STATUS_SEMAPHORE_LIMIT_EXCEEDED
	StatusRecord::new(0xC000_0048, 87, 22, "An attempt to set a process's DebugPort or ExceptionPort was made, but a port already exists in the process or an attempt to set a file's CompletionPort made, but a port was already set in the file."), // STATUS_PORT_ALREADY_SET
	StatusRecord::new(0xC000_0049, 87, 22, "An attempt was made to query image information on a section which does not map an image."), // STATUS_SECTION_NOT_IMAGE
	StatusRecord::new(0xC000_004A, 156, 0, "An attempt was made to suspend a thread whose suspend count was at its maximum."), // STATUS_SUSPEND_COUNT_EXCEEDED
	StatusRecord::new(0xC000_004B, 5, 13, "An attempt was made to access a thread that has begun termination."), // STATUS_THREAD_IS_TERMINATING
	StatusRecord::new(0xC000_004C, 87, 22, "An attempt was made to set the working set limit to an invalid value (minimum greater than maximum, etc)."), // STATUS_BAD_WORKING_SET_LIMIT
	StatusRecord::new(0xC000_004D, 87, 22, "A section was created to map a file which is not compatible to an already existing section which maps the same file."), // STATUS_INCOMPATIBLE_FILE_MAP
	StatusRecord::new(0xC000_004E, 87, 22, "A view to a section specifies a protection which is incompatible with the initial view's protection."), // STATUS_SECTION_PROTECTION
	StatusRecord::new(0xC000_004F, 282, 129, "An operation involving EAs failed because the file system does not support EAs."), // STATUS_EAS_NOT_SUPPORTED
	StatusRecord::new(0xC000_0050, 255, 0, "An EA operation failed because EA set is too large."), // STATUS_EA_TOO_LARGE
	StatusRecord::new(0xC000_0051, 255, 0, "An EA operation failed because the name or EA index is invalid."), // STATUS_NONEXISTENT_EA_ENTRY
	StatusRecord::new(0xC000_0052, 255, 0, "The file for which EAs were requested has no EAs."), // STATUS_NO_EAS_ON_FILE
	StatusRecord::new(0xC000_0053, 255, 0, "The EA is corrupt and non-readable."), // STATUS_EA_CORRUPT_ERROR
	StatusRecord::new(0xC000_0054, 33, 13, "A requested read/write cannot be granted due to a conflicting file lock."), // STATUS_FILE_LOCK_CONFLICT
	StatusRecord::new(0xC000_0055, 33, 13, "A requested file lock cannot be granted due to other existing locks."), // STATUS_LOCK_NOT_GRANTED
	StatusRecord::new(0xC000_0056, 5, 13, "A non close operation has been requested of a file object with a delete pending."), // STATUS_DELETE_PENDING
	StatusRecord::new(0xC000_0057, 50, 129, "An attempt was made to set the control attribute on a file. This attribute is not supported in the target file system."), // STATUS_CTL_FILE_NOT_SUPPORTED
	StatusRecord::new(0xC000_0058, 1305, 0, "Indicates a revision number encountered or specified is not one known by the service. It may be a more recent revision than the service is aware of."), // STATUS_UNKNOWN_REVISION
	StatusRecord::new(0xC000_0059, 1306, 0, "Indicates two revision levels are incompatible."), // STATUS_REVISION_MISMATCH
	StatusRecord::new(0xC000_005A, 1307, 0, "Indicates a particular Security ID may not be assigned as the owner of an object."), // STATUS_INVALID_OWNER
	StatusRecord::new(0xC000_005B, 1308, 0, "Indicates a particular Security ID may not be assigned as the primary group of an object."), // STATUS_INVALID_PRIMARY_GROUP
	StatusRecord::new(0xC000_005C, 1309, 0, "An attempt has been made to operate on an impersonation token by a thread that is not currently impersonating a client."), // STATUS_NO_IMPERSONATION_TOKEN
	StatusRecord::new(0xC000_005D, 1310, 0, "A mandatory group may not be disabled."), // STATUS_CANT_DISABLE_MANDATORY
	StatusRecord::new(0xC000_005E, 1311, 0, "There are currently no logon servers available to service the logon request."), // STATUS_NO_LOGON_SERVERS
	StatusRecord::new(0xC000_005F, 1312, 0, "A specified logon session does not exist. It may already have been terminated."), // STATUS_NO_SUCH_LOGON_SESSION
	StatusRecord::new(0xC000_0060, 1313, 0, "A specified privilege does not exist."), // STATUS_NO_SUCH_PRIVILEGE
	StatusRecord::new(0xC000_0061, 1314, 1, "A required privilege is not held by the client."), // STATUS_PRIVILEGE_NOT_HELD
	StatusRecord::new(0xC000_0062, 1315, 0, "The name provided is not a properly formed account name."), // STATUS_INVALID_ACCOUNT_NAME
	StatusRecord::new(0xC000_0063, 1316, 0, "The specified account already exists."), // STATUS_USER_EXISTS
	StatusRecord::new(0xC000_0064, 1317, 0, "The specified account does not exist."), // STATUS_NO_SUCH_USER
	StatusRecord::new(0xC000_0065, 1318, 0, "The specified group already exists."), // STATUS_GROUP_EXISTS
	StatusRecord::new(0xC000_0066, 1319, 0, "The specified group does not exist."), // STATUS_NO_SUCH_GROUP
	StatusRecord::new(0xC000_0067, 1320, 0, "The specified user account is already in the specified group account. Also used to indicate a group cannot be deleted because it contains a member."), // STATUS_MEMBER_IN_GROUP
	StatusRecord::new(0xC000_0068, 1321, 0, "The specified user account is not a member of the specified group account."), // STATUS_MEMBER_NOT_IN_GROUP
	StatusRecord::new(0xC000_0069, 1322, 0, "Indicates the requested operation would disable or delete the last remaining administration account. This is not allowed to prevent creating a situation in which the system cannot be administrated."), // STATUS_LAST_ADMIN
	StatusRecord::new(0xC000_006A, 86, 0, "When trying to update a password, this return status indicates that the value provided as the current password is not correct."), // STATUS_WRONG_PASSWORD
	StatusRecord::new(0xC000_006B, 1324, 0, "When trying to update a password, this return status indicates that the value provided for the new password contains values that are not allowed in passwords."), // STATUS_ILL_FORMED_PASSWORD
	StatusRecord::new(0xC000_006C, 1325, 0, "When trying to update a password, this status indicates that some password update rule has been violated. For example, the password may not meet length criteria."), // STATUS_PASSWORD_RESTRICTION
	StatusRecord::new(0xC000_006D, 1326, 0, "The attempted logon is invalid. This is either due to a bad username or authentication information."), // STATUS_LOGON_FAILURE
	StatusRecord::new(0xC000_006E, 1327, 0, "Indicates a referenced user name and authentication information are valid, but some user account restriction has prevented successful authentication (such as time-of-day restrictions)."), // STATUS_ACCOUNT_RESTRICTION
	StatusRecord::new(0xC000_006F, 1328, 0, "The user account has time restrictions and may not be logged onto at this time."), // STATUS_INVALID_LOGON_HOURS
	StatusRecord::new(0xC000_0070, 1329, 0, "The user account is restricted such that it may not be used to log on from the source workstation."), // STATUS_INVALID_WORKSTATION
	StatusRecord::new(0xC000_0071, 1330, 0, "The user account's password has expired."), // STATUS_PASSWORD_EXPIRED
	StatusRecord::new(0xC000_0072, 1331, 0, "The referenced account is currently disabled and may not be logged on to."), // STATUS_ACCOUNT_DISABLED
	StatusRecord::new(0xC000_0073, 1332, 0, "None of the information to be translated has been translated."), // STATUS_NONE_MAPPED
	StatusRecord::new(0xC000_0074, 1333, 0, "The number of LUIDs requested may not be allocated with a single allocation."), // STATUS_TOO_MANY_LUIDS_REQUESTED
	StatusRecord::new(0xC000_0075, 1334, 0, "Indicates there are no more LUIDs to allocate."), // STATUS_LUIDS_EXHAUSTED
	StatusRecord::new(0xC000_0076, 1335, 0, "Indicates the sub-authority value is invalid for the particular use."), // STATUS_INVALID_SUB_AUTHORITY
	StatusRecord::new(0xC000_0077, 1336, 0, "Indicates the ACL structure is not valid."), // STATUS_INVALID_ACL
	StatusRecord::new(0xC000_0078, 1337, 0, "Indicates the SID structure is not valid."), // STATUS_INVALID_SID
	StatusRecord::new(0xC000_0079, 1338, 0, "Indicates the SECURITY_DESCRIPTOR structure is not valid."), // STATUS_INVALID_SECURITY_DESCR
	StatusRecord::new(0xC000_007A, 127, 0, "Indicates the specified procedure address cannot be found in the DLL."), // STATUS_PROCEDURE_NOT_FOUND
	StatusRecord::new(0xC000_007B, 193, 8, "{Bad Image}\n%hs is either not designed to run on Windows or it contains an error. Try installing the program again using the original installation media or contact your system administrator or the software vendor for support."), // STATUS_INVALID_IMAGE_FORMAT
	StatusRecord::new(0xC000_007C, 1008, 0, "An attempt was made to reference a token that doesn't exist.\nThis is typically done by referencing the token associated with a thread when the thread is not impersonating a client."), // STATUS_NO_TOKEN
	StatusRecord::new(0xC000_007D, 1340, 0, "Indicates that an attempt to build either an inherited ACL or ACE was not successful.\nThis can be caused by a number of things. One of the more probable causes is the replacement of a CreatorId with an SID that didn't fit into the ACE or ACL."), // STATUS_BAD_INHERITANCE_ACL
	StatusRecord::new(0xC000_007E, 158, 13, "The range specified in NtUnlockFile was not locked."), // STATUS_RANGE_NOT_LOCKED
	StatusRecord::new(0xC000_007F, 112, 28, "An operation failed because the disk was full."), // STATUS_DISK_FULL
	StatusRecord::new(0xC000_0080, 1341, 0, "The GUID allocation server is [already] disabled at the moment."), // STATUS_SERVER_DISABLED
	StatusRecord::new(0xC000_0081, 1342, 0, "The GUID allocation server is [already] enabled at the moment."), // STATUS_SERVER_NOT_DISABLED
	StatusRecord::new(0xC000_0082, 68, 0, "Too many GUIDs were requested from the allocation server at once."), // STATUS_TOO_MANY_GUIDS_REQUESTED
	StatusRecord::new(0xC000_0083, 259, 0, "The GUIDs could not be allocated because the Authority Agent was exhausted."), // STATUS_GUIDS_EXHAUSTED
	StatusRecord::new(0xC000_0084, 1343, 0, "The value provided was an invalid value for an identifier authority."), // STATUS_INVALID_ID_AUTHORITY
	StatusRecord::new(0xC000_0085, 259, 0, "There are no more authority agent values available for the given identifier authority value."), // STATUS_AGENTS_EXHAUSTED
	StatusRecord::new(0xC000_0086, 154, 0, "An invalid volume label has been specified."), // STATUS_INVALID_VOLUME_LABEL
	StatusRecord::new(0xC000_0087, 14, 0, "A mapped section could not be extended."), // STATUS_SECTION_NOT_EXTENDED
	StatusRecord::new(0xC000_0088, 487, 14, "Specified section to flush does not map a data file."), // STATUS_NOT_MAPPED_DATA
	StatusRecord::new(0xC000_0089, 1812, 0, "Indicates the specified image file did not contain a resource section."), // STATUS_RESOURCE_DATA_NOT_FOUND
	StatusRecord::new(0xC000_008A, 1813, 0, "Indicates the specified resource type cannot be found in the image file."), // STATUS_RESOURCE_TYPE_NOT_FOUND
	StatusRecord::new(0xC000_008B, 1814, 0, "Indicates the specified resource name cannot be found in the image file."), // STATUS_RESOURCE_NAME_NOT_FOUND
	StatusRecord::new(0xC000_008C, 0xC000_008C, 0, "{EXCEPTION}\nArray bounds exceeded."), // STATUS_ARRAY_BOUNDS_EXCEEDED
	StatusRecord::new(0xC000_008D, 0xC000_008D, 0, "{EXCEPTION}\nFloating-point denormal operand."), // STATUS_FLOAT_DENORMAL_OPERAND
	StatusRecord::new(0xC000_008E, 0xC000_008E, 0, "{EXCEPTION}\nFloating-point division by zero."), // STATUS_FLOAT_DIVIDE_BY_ZERO
	StatusRecord::new(0xC000_008F, 0xC000_008F, 0, "{EXCEPTION}\nFloating-point inexact result."), // STATUS_FLOAT_INEXACT_RESULT
	StatusRecord::new(0xC000_0090, 0xC000_0090, 0, "{EXCEPTION}\nFloating-point invalid operation."), // STATUS_FLOAT_INVALID_OPERATION
	StatusRecord::new(0xC000_0091, 0xC000_0091, 0, "{EXCEPTION}\nFloating-point overflow."), // STATUS_FLOAT_OVERFLOW
	StatusRecord::new(0xC000_0092, 0xC000_0092, 0, "{EXCEPTION}\nFloating-point stack check."), // STATUS_FLOAT_STACK_CHECK
	StatusRecord::new(0xC000_0093, 0xC000_0093, 0, "{EXCEPTION}\nFloating-point underflow."), // STATUS_FLOAT_UNDERFLOW
	StatusRecord::new(0xC000_0094, 0xC000_0094, 0, "{EXCEPTION}\nInteger division by zero."), // STATUS_INTEGER_DIVIDE_BY_ZERO
	StatusRecord::new(0xC000_0095, 534, 132, "{EXCEPTION}\nInteger overflow."), // STATUS_INTEGER_OVERFLOW
	StatusRecord::new(0xC000_0096, 0xC000_0096, 0, "{EXCEPTION}\nPrivileged instruction."), // STATUS_PRIVILEGED_INSTRUCTION
	StatusRecord::new(0xC000_0097, 8, 12, "An attempt was made to install more paging files than the system supports."), // STATUS_TOO_MANY_PAGING_FILES
	StatusRecord::new(0xC000_0098, 1006, 0, "The volume for a file has been externally altered such that the opened file is no longer valid."), // STATUS_FILE_INVALID
	StatusRecord::new(0xC000_0099, 1344, 0, "When a block of memory is allotted for future updates, such as the memory allocated to hold discretionary access control and primary group information, successive updates may exceed the amount of memory originally allotted.\nSince quota may already have been charged to several processes which have handles to the object, it is not reasonable to alter the size of the allocated memory.\nInstead, a request that requires more memory than has been allotted must fail and the STATUS_ALLOTED_SPACE_EXCEEDED error returned."), // STATUS_ALLOTTED_SPACE_EXCEEDED
	StatusRecord::new(0xC000_009A, 1450, 12, "Insufficient system resources exist to complete the API."), // STATUS_INSUFFICIENT_RESOURCES
	StatusRecord::new(0xC000_009B, 3, 2, "An attempt has been made to open a DFS exit path control file."), // STATUS_DFS_EXIT_PATH_FOUND
	StatusRecord::new(0xC000_009C, 23, 13, "STATUS_DEVICE_DATA_ERROR"),
	StatusRecord::new(0xC000_009D, 1167, 6, "STATUS_DEVICE_NOT_CONNECTED"),
	StatusRecord::new(0xC000_009E, 21, 13, "STATUS_DEVICE_POWER_FAILURE"),
	StatusRecord::new(0xC000_009F, 487, 14, "Virtual memory cannot be freed as base address is not the base of the region and a region size of zero was specified."), // STATUS_FREE_VM_NOT_AT_BASE
	StatusRecord::new(0xC000_00A0, 487, 14, "An attempt was made to free virtual memory which is not allocated."), // STATUS_MEMORY_NOT_ALLOCATED
	StatusRecord::new(0xC000_00A1, 1453, 12, "The working set is not big enough to allow the requested pages to be locked."), // STATUS_WORKING_SET_QUOTA
	StatusRecord::new(0xC000_00A2, 19, 13, "{Write Protect Error}\nThe disk cannot be written to because it is write protected.\nPlease remove the write protection from the volume %hs in drive %hs."), // STATUS_MEDIA_WRITE_PROTECTED
	StatusRecord::new(0xC000_00A3, 21, 13, "{Drive Not Ready}\nThe drive is not ready for use; its door may be open.\nPlease check drive %hs and make sure that a disk is inserted and that the drive door is closed."), // STATUS_DEVICE_NOT_READY
	StatusRecord::new(0xC000_00A4, 1345, 0, "The specified attributes are invalid, or incompatible with the attributes for the group as a whole."), // STATUS_INVALID_GROUP_ATTRIBUTES
	StatusRecord::new(0xC000_00A5, 1346, 0, "A specified impersonation level is invalid.\nAlso used to indicate a required impersonation level was not provided."), // STATUS_BAD_IMPERSONATION_LEVEL
	StatusRecord::new(0xC000_00A6, 1347, 0, "An attempt was made to open an Anonymous level token.\nAnonymous tokens may not be opened."), // STATUS_CANT_OPEN_ANONYMOUS
	StatusRecord::new(0xC000_00A7, 1348, 0, "The validation information class requested was invalid."), // STATUS_BAD_VALIDATION_CLASS
	StatusRecord::new(0xC000_00A8, 1349, 0, "The type of a token object is inappropriate for its attempted use."), // STATUS_BAD_TOKEN_TYPE
	StatusRecord::new(0xC000_00A9, 87, 22, "{Bad Master Boot Record}\nThe master boot record of the disk is corrupted."), // STATUS_BAD_MASTER_BOOT_RECORD
	StatusRecord::new(0xC000_00AA, 549, 0, "An attempt was made to execute an instruction at an unaligned address and the host system does not support unaligned instruction references."), // STATUS_INSTRUCTION_MISALIGNMENT
	StatusRecord::new(0xC000_00AB, 231, 16, "The maximum named pipe instance count has been reached."), // STATUS_INSTANCE_NOT_AVAILABLE
	StatusRecord::new(0xC000_00AC, 231, 16, "An instance of a named pipe cannot be found in the listening state."), // STATUS_PIPE_NOT_AVAILABLE
	StatusRecord::new(0xC000_00AD, 231, 16, "The named pipe is not in the connected or closing state."), // STATUS_INVALID_PIPE_STATE
	StatusRecord::new(0xC000_00AE, 231, 16, "The specified pipe is set to complete operations and there are current I/O operations queued so it cannot be changed to queue operations."), // STATUS_PIPE_BUSY
	StatusRecord::new(0xC000_00AF, 1, 22, "The specified handle is not open to the server end of the named pipe."), // STATUS_ILLEGAL_FUNCTION
	StatusRecord::new(0xC000_00B0, 233, 32, "The specified named pipe is in the disconnected state."), // STATUS_PIPE_DISCONNECTED
	StatusRecord::new(0xC000_00B1, 232, 32, "The specified named pipe is in the closing state."), // STATUS_PIPE_CLOSING
	StatusRecord::new(0xC000_00B2, 535, 0, "The specified named pipe is in the connected state."), // STATUS_PIPE_CONNECTED
	StatusRecord::new(0xC000_00B3, 536, 0, "The specified named pipe is in the listening state."), // STATUS_PIPE_LISTENING
	StatusRecord::new(0xC000_00B4, 231, 16, "The specified named pipe is not in message mode."), // STATUS_INVALID_READ_MODE
	StatusRecord::new(0xC000_00B5, 121, 138, "{Device Timeout}\nThe specified I/O operation on %hs was not completed before the time-out period expired."), // STATUS_IO_TIMEOUT
	StatusRecord::new(0xC000_00B6, 38, 0, "The specified file has been closed by another process."), // STATUS_FILE_FORCED_CLOSED
	StatusRecord::new(0xC000_00B7, 550, 0, "Profiling not started."), // STATUS_PROFILING_NOT_STARTED
	StatusRecord::new(0xC000_00B8, 551, 0, "Profiling not stopped."), // STATUS_PROFILING_NOT_STOPPED
	StatusRecord::new(0xC000_00B9, 552, 0, "The passed ACL did not contain the minimum required information."), // STATUS_COULD_NOT_INTERPRET
	StatusRecord::new(0xC000_00BA, 5, 13, "The file that was specified as a target is a directory and the caller specified that it could be anything but a directory."), // STATUS_FILE_IS_A_DIRECTORY
	StatusRecord::new(0xC000_00BB, 50, 129, "The request is not supported."), // STATUS_NOT_SUPPORTED
	StatusRecord::new(0xC000_00BC, 51, 0, "This remote computer is not listening."), // STATUS_REMOTE_NOT_LISTENING
	StatusRecord::new(0xC000_00BD, 52, 0, "A duplicate name exists on the network."), // STATUS_DUPLICATE_NAME
	StatusRecord::new(0xC000_00BE, 53, 2, "The network path cannot be located."), // STATUS_BAD_NETWORK_PATH
	StatusRecord::new(0xC000_00BF, 54, 16, "The network is busy."), // STATUS_NETWORK_BUSY
	StatusRecord::new(0xC000_00C0, 55, 19, "This device does not exist."), // STATUS_DEVICE_DOES_NOT_EXIST
	StatusRecord::new(0xC000_00C1, 56, 0, "The network BIOS command limit has been reached."), // STATUS_TOO_MANY_COMMANDS
	StatusRecord::new(0xC000_00C2, 57, 0, "An I/O adapter hardware error has occurred."), // STATUS_ADAPTER_HARDWARE_ERROR
	StatusRecord::new(0xC000_00C3, 58, 0, "The network responded incorrectly."), // STATUS_INVALID_NETWORK_RESPONSE
	StatusRecord::new(0xC000_00C4, 59, 5, "An unexpected network error occurred."), // STATUS_UNEXPECTED_NETWORK_ERROR
	StatusRecord::new(0xC000_00C5, 60, 0, "The remote adapter is not compatible."), // STATUS_BAD_REMOTE_ADAPTER
	StatusRecord::new(0xC000_00C6, 61, 0, "The printer queue is full."), // STATUS_PRINT_QUEUE_FULL
	StatusRecord::new(0xC000_00C7, 62, 0, "Space to store the file waiting to be printed is not available on the server."), // STATUS_NO_SPOOL_SPACE
	StatusRecord::new(0xC000_00C8, 63, 0, "The requested print file has been canceled."), // STATUS_PRINT_CANCELLED
	StatusRecord::new(0xC000_00C9, 64, 108, "The network name was deleted."), // STATUS_NETWORK_NAME_DELETED
	StatusRecord::new(0xC000_00CA, 65, 13, "Network access is denied."), // STATUS_NETWORK_ACCESS_DENIED
	StatusRecord::new(0xC000_00CB, 66, 0, "{Incorrect Network Resource Type}\nThe specified device type (LPT, for example) conflicts with the actual device type on the remote resource."), // STATUS_BAD_DEVICE_TYPE
	StatusRecord::new(0xC000_00CC, 67, 2, "{Network Name Not Found}\nThe specified share name cannot be found on the remote server."), // STATUS_BAD_NETWORK_NAME
	StatusRecord::new(0xC000_00CD, 68, 0, "The name limit for the local computer network adapter card was exceeded."), // STATUS_TOO_MANY_NAMES
	StatusRecord::new(0xC000_00CE, 69, 0, "The network BIOS session limit was exceeded."), // STATUS_TOO_MANY_SESSIONS
	StatusRecord::new(0xC000_00CF, 70, 0, "File sharing has been temporarily paused."), // STATUS_SHARING_PAUSED
	StatusRecord::new(0xC000_00D0, 71, 0, "No more connections can be made to this remote computer at this time because there are already as many connections as the computer can accept."), // STATUS_REQUEST_NOT_ACCEPTED
	StatusRecord::new(0xC000_00D1, 72, 0, "Print or disk redirection is temporarily paused."), // STATUS_REDIRECTOR_PAUSED
	StatusRecord::new(0xC000_00D2, 88, 0, "A network data fault occurred."), // STATUS_NET_WRITE_FAULT
	StatusRecord::new(0xC000_00D3, 553, 0, "The number of active profiling objects is at the maximum and no more may be started."), // STATUS_PROFILING_AT_LIMIT
	StatusRecord::new(0xC000_00D4, 17, 18, "{Incorrect Volume}\nThe target file of a rename request is located on a different device than the source of the rename request."), // STATUS_NOT_SAME_DEVICE
	StatusRecord::new(0xC000_00D5, 1, 22, "The file specified has been renamed and thus cannot be modified."), // STATUS_FILE_RENAMED
	StatusRecord::new(0xC000_00D6, 240, 108, "{Network Request Timeout}\nThe session with a remote server has been disconnected because the time-out interval for a request has expired."), // STATUS_VIRTUAL_CIRCUIT_CLOSED
	StatusRecord::new(0xC000_00D7, 1350, 0, "Indicates an attempt was made to operate on the security of an object that does not have security associated with it."), // STATUS_NO_SECURITY_ON_OBJECT
	StatusRecord::new(0xC000_00D8, 554, 140, "Used to indicate that an operation cannot continue without blocking for I/O."), // STATUS_CANT_WAIT
	StatusRecord::new(0xC000_00D9, 232, 32, "Used to indicate that a read operation was done on an empty pipe."), // STATUS_PIPE_EMPTY
	StatusRecord::new(0xC000_00DA, 1351, 0, "Configuration information could not be read from the domain controller, either because the machine is unavailable, or access has been denied."), // STATUS_CANT_ACCESS_DOMAIN_INFO
	StatusRecord::new(0xC000_00DB, 555, 0, "Indicates that a thread attempted to terminate itself by default (called NtTerminateThread with NULL) and it was the last thread in the current process."), // STATUS_CANT_TERMINATE_SELF
	StatusRecord::new(0xC000_00DC, 1352, 0, "Indicates the Sam Server was in the wrong state to perform the desired operation."), // STATUS_INVALID_SERVER_STATE
	StatusRecord::new(0xC000_00DD, 1353, 0, "Indicates the Domain was in the wrong state to perform the desired operation."), // STATUS_INVALID_DOMAIN_STATE
	StatusRecord::new(0xC000_00DE, 1354, 0, "This operation is only allowed for the Primary Domain Controller of the domain."), // STATUS_INVALID_DOMAIN_ROLE
	StatusRecord::new(0xC000_00DF, 1355, 0, "The specified Domain did not exist."), // STATUS_NO_SUCH_DOMAIN
	StatusRecord::new(0xC000_00E0, 1356, 0, "The specified Domain already exists."), // STATUS_DOMAIN_EXISTS
	StatusRecord::new(0xC000_00E1, 1357, 0, "An attempt was made to exceed the limit on the number of domains per server for this release."), // STATUS_DOMAIN_LIMIT_EXCEEDED
	StatusRecord::new(0xC000_00E2, 300, 0, "Error status returned when oplock request is denied."), // STATUS_OPLOCK_NOT_GRANTED
	StatusRecord::new(0xC000_00E3, 301, 0, "Error status returned when an invalid oplock acknowledgment is received by a file system."), // STATUS_INVALID_OPLOCK_PROTOCOL
	StatusRecord::new(0xC000_00E4, 1358, 0, "This error indicates that the requested operation cannot be completed due to a catastrophic media failure or on-disk data structure corruption."), // STATUS_INTERNAL_DB_CORRUPTION
	StatusRecord::new(0xC000_00E5, 1359, 0, "An internal error occurred."), // STATUS_INTERNAL_ERROR
	StatusRecord::new(0xC000_00E6, 1360, 0, "Indicates generic access types were contained in an access mask which should already be mapped to non-generic access types."), // STATUS_GENERIC_NOT_MAPPED
	StatusRecord::new(0xC000_00E7, 1361, 0, "Indicates a security descriptor is not in the necessary format (absolute or self-relative)."), // STATUS_BAD_DESCRIPTOR_FORMAT
	StatusRecord::new(0xC000_00E8, 1784, 14, "An access to a user buffer failed at an \"expected\" point in time.\nThis code is defined since the caller does not want to accept STATUS_ACCESS_VIOLATION in its filter."), // STATUS_INVALID_USER_BUFFER
	StatusRecord::new(0xC000_00E9, 1117, 5, "If an I/O error is returned which is not defined in the standard FsRtl filter, it is converted to the following error which is guaranteed to be in the filter.\nIn this case information is lost, however, the filter correctly handles the exception."), // STATUS_UNEXPECTED_IO_ERROR
	StatusRecord::new(0xC000_00EA, 556, 0, "If an MM error is returned which is not defined in the standard FsRtl filter, it is converted to one of the following errors which is guaranteed to be in the filter.\nIn this case information is lost, however, the filter correctly handles the exception."), // STATUS_UNEXPECTED_MM_CREATE_ERR
	StatusRecord::new(0xC000_00EB, 557, 0, "If an MM error is returned which is not defined in the standard FsRtl filter, it is converted to one of the following errors which is guaranteed to be in the filter.\nIn this case information is lost, however, the filter correctly handles the exception."), // STATUS_UNEXPECTED_MM_MAP_ERROR
	StatusRecord::new(0xC000_00EC, 558, 0, "If an MM error is returned which is not defined in the standard FsRtl filter, it is converted to one of the following errors which is guaranteed to be in the filter.\nIn this case information is lost, however, the filter correctly handles the exception."), // STATUS_UNEXPECTED_MM_EXTEND_ERR
	StatusRecord::new(0xC000_00ED, 1362, 0, "The requested action is restricted for use by logon processes only. The calling process has not registered as a logon process."), // STATUS_NOT_LOGON_PROCESS
	StatusRecord::new(0xC000_00EE, 1363, 0, "An attempt has been made to start a new session manager or LSA logon session with an ID that is already in use."), // STATUS_LOGON_SESSION_EXISTS
	StatusRecord::new(0xC000_00EF, 87, 22, "An invalid parameter was passed to a service or function as the first argument."), // STATUS_INVALID_PARAMETER_1
	StatusRecord::new(0xC000_00F0, 87, 22, "An invalid parameter was passed to a service or function as the second argument."), // STATUS_INVALID_PARAMETER_2
	StatusRecord::new(0xC000_00F1, 87, 22, "An invalid parameter was passed to a service or function as the third argument."), // STATUS_INVALID_PARAMETER_3
	StatusRecord::new(0xC000_00F2, 87, 22, "An invalid parameter was passed to a service or function as the fourth argument."), // STATUS_INVALID_PARAMETER_4
	StatusRecord::new(0xC000_00F3, 87, 22, "An invalid parameter was passed to a service or function as the fifth argument."), // STATUS_INVALID_PARAMETER_5
	StatusRecord::new(0xC000_00F4, 87, 22, "An invalid parameter was passed to a service or function as the sixth argument."), // STATUS_INVALID_PARAMETER_6
	StatusRecord::new(0xC000_00F5, 87, 22, "An invalid parameter was passed to a service or function as the seventh argument."), // STATUS_INVALID_PARAMETER_7
	StatusRecord::new(0xC000_00F6, 87, 22, "An invalid parameter was passed to a service or function as the eighth argument."), // STATUS_INVALID_PARAMETER_8
	StatusRecord::new(0xC000_00F7, 87, 22, "An invalid parameter was passed to a service or function as the ninth argument."), // STATUS_INVALID_PARAMETER_9
	StatusRecord::new(0xC000_00F8, 87, 22, "An invalid parameter was passed to a service or function as the tenth argument."), // STATUS_INVALID_PARAMETER_10
	StatusRecord::new(0xC000_00F9, 87, 22, "An invalid parameter was passed to a service or function as the eleventh argument."), // STATUS_INVALID_PARAMETER_11
	StatusRecord::new(0xC000_00FA, 87, 22, "An invalid parameter was passed to a service or function as the twelfth argument."), // STATUS_INVALID_PARAMETER_12
	StatusRecord::new(0xC000_00FB, 3, 2, "An attempt was made to access a network file, but the network software was not yet started."), // STATUS_REDIRECTOR_NOT_STARTED
	StatusRecord::new(0xC000_00FC, 1, 22, "An attempt was made to start the redirector, but the redirector has already been started."), // STATUS_REDIRECTOR_STARTED
	StatusRecord::new(0xC000_00FD, 1001, 0, "A new guard page for the stack cannot be created."), // STATUS_STACK_OVERFLOW
	StatusRecord::new(0xC000_00FE, 1364, 0, "A specified authentication package is unknown."), // STATUS_NO_SUCH_PACKAGE
	StatusRecord::new(0xC000_00FF, 559, 0, "A malformed function table was encountered during an unwind operation."), // STATUS_BAD_FUNCTION_TABLE
	StatusRecord::new(0xC000_0100, 203, 0, "Indicates the specified environment variable name was not found in the specified environment block."), // STATUS_VARIABLE_NOT_FOUND
	StatusRecord::new(0xC000_0101, 145, 41, "Indicates that the directory trying to be deleted is not empty."), // STATUS_DIRECTORY_NOT_EMPTY
	StatusRecord::new(0xC000_0102, 1392, 5, "{Corrupt File}\nThe file or directory %hs is corrupt and unreadable.\nPlease run the Chkdsk utility."), // STATUS_FILE_CORRUPT_ERROR
	StatusRecord::new(0xC000_0103, 267, 20, "A requested opened file is not a directory."), // STATUS_NOT_A_DIRECTORY
	StatusRecord::new(0xC000_0104, 1365, 0, "The logon session is not in a state that is consistent with the requested operation."), // STATUS_BAD_LOGON_SESSION_STATE
	StatusRecord::new(0xC000_0105, 1366, 0, "An internal LSA error has occurred. An authentication package has requested the creation of a Logon Session but the ID of an already existing Logon Session has been specified."), // STATUS_LOGON_SESSION_COLLISION
	StatusRecord::new(0xC000_0106, 206, 2, "A specified name string is too long for its intended use."), // STATUS_NAME_TOO_LONG
	StatusRecord::new(0xC000_0107, 2401, 16, "The user attempted to force close the files on a redirected drive, but there were opened files on the drive, and the user did not specify a sufficient level of force."), // STATUS_FILES_OPEN
	StatusRecord::new(0xC000_0108, 2404, 16, "The user attempted to force close the files on a redirected drive, but there were opened directories on the drive, and the user did not specify a sufficient level of force."), // STATUS_CONNECTION_IN_USE
	StatusRecord::new(0xC000_0109, 317, 0, "RtlFindMessage could not locate the requested message ID in the message table resource."), // STATUS_MESSAGE_NOT_FOUND
	StatusRecord::new(0xC000_010A, 5, 13, "An attempt was made to access an exiting process."), // STATUS_PROCESS_IS_TERMINATING
	StatusRecord::new(0xC000_010B, 1367, 0, "Indicates an invalid value has been provided for the LogonType requested."), // STATUS_INVALID_LOGON_TYPE
	StatusRecord::new(0xC000_010C, 560, 0, "Indicates that an attempt was made to assign protection to a file system file or directory and one of the SIDs in the security descriptor could not be translated into a GUID that could be stored by the file system.\nThis causes the protection attempt to fail, which may cause a file creation attempt to fail."), // STATUS_NO_GUID_TRANSLATION
	StatusRecord::new(0xC000_010D, 1368, 0, "Indicates that an attempt has been made to impersonate via a named pipe that has not yet been read from."), // STATUS_CANNOT_IMPERSONATE
	StatusRecord::new(0xC000_010E, 1056, 0, "Indicates that the specified image is already loaded."), // STATUS_IMAGE_ALREADY_LOADED
	StatusRecord::new(0xC000_0117, 538, 0, "Indicates that an attempt was made to change the size of the LDT for a process that has no LDT."), // STATUS_NO_LDT
	StatusRecord::new(0xC000_0118, 561, 0, "Indicates that an attempt was made to grow an LDT by setting its size, or that the size was not an even number of selectors."), // STATUS_INVALID_LDT_SIZE
	StatusRecord::new(0xC000_0119, 563, 0, "Indicates that the starting value for the LDT information was not an integral multiple of the selector size."), // STATUS_INVALID_LDT_OFFSET
	StatusRecord::new(0xC000_011A, 564, 0, "Indicates that the user supplied an invalid descriptor when trying to set up Ldt descriptors."), // STATUS_INVALID_LDT_DESCRIPTOR
	StatusRecord::new(0xC000_011B, 193, 8, "The specified image file did not have the correct format. It appears to be NE format."), // STATUS_INVALID_IMAGE_NE_FORMAT
	StatusRecord::new(0xC000_011C, 1369, 0, "Indicates that the transaction state of a registry sub-tree is incompatible with the requested operation.\nFor example, a request has been made to start a new transaction with one already in progress, or a request has been made to apply a transaction when one is not currently in progress."), // STATUS_RXACT_INVALID_STATE
	StatusRecord::new(0xC000_011D, 1370, 0, "Indicates an error has occurred during a registry transaction commit.\nThe database has been left in an unknown, but probably inconsistent, state.\nThe state of the registry transaction is left as COMMITTING."), // STATUS_RXACT_COMMIT_FAILURE
	StatusRecord::new(0xC000_011E, 1006, 0, "An attempt was made to map a file of size zero with the maximum size specified as zero."), // STATUS_MAPPED_FILE_SIZE_ZERO
	StatusRecord::new(0xC000_011F, 4, 24, "Too many files are opened on a remote server.\nThis error should only be returned by the Windows redirector on a remote drive."), // STATUS_TOO_MANY_OPENED_FILES
	StatusRecord::new(0xC000_0120, 995, 105, "The I/O request was canceled."), // STATUS_CANCELLED
	StatusRecord::new(0xC000_0121, 5, 13, "An attempt has been made to remove a file or directory that cannot be deleted."), // STATUS_CANNOT_DELETE
	StatusRecord::new(0xC000_0122, 1210, 0, "Indicates a name specified as a remote computer name is syntactically invalid."), // STATUS_INVALID_COMPUTER_NAME
	StatusRecord::new(0xC000_0123, 5, 13, "An I/O request other than close was performed on a file after it has been deleted, which can only happen to a request which did not complete before the last handle was closed via NtClose."), // STATUS_FILE_DELETED
	StatusRecord::new(0xC000_0124, 1371, 0, "Indicates an operation has been attempted on a built-in (special) SAM account which is incompatible with built-in accounts. For example, built-in accounts cannot be deleted."), // STATUS_SPECIAL_ACCOUNT
	StatusRecord::new(0xC000_0125, 1372, 0, "The operation requested may not be performed on the specified group because it is a built-in special group."), // STATUS_SPECIAL_GROUP
	StatusRecord::new(0xC000_0126, 1373, 0, "The operation requested may not be performed on the specified user because it is a built-in special user."), // STATUS_SPECIAL_USER
	StatusRecord::new(0xC000_0127, 1374, 0, "Indicates a member cannot be removed from a group because the group is currently the member's primary group."), // STATUS_MEMBERS_PRIMARY_GROUP
	StatusRecord::new(0xC000_0128, 6, 9, "An I/O request other than close and several other special case operations was attempted using a file object that had already been closed."), // STATUS_FILE_CLOSED
	StatusRecord::new(0xC000_0129, 565, 11, "Indicates a process has too many threads to perform the requested action. For example, assignment of a primary token may only be performed when a process has zero or one threads."), // STATUS_TOO_MANY_THREADS
	StatusRecord::new(0xC000_012A, 566, 0, "An attempt was made to operate on a thread within a specific process, but the thread specified is not in the process specified."), // STATUS_THREAD_NOT_IN_PROCESS
	StatusRecord::new(0xC000_012B, 1375, 0, "An attempt was made to establish a token for use as a primary token but the token is already in use. A token can only be the primary token of one process at a time."), // STATUS_TOKEN_ALREADY_IN_USE
	StatusRecord::new(0xC000_012C, 567, 0, "Page file quota was exceeded."), // STATUS_PAGEFILE_QUOTA_EXCEEDED
	StatusRecord::new(0xC000_012D, 1455, 12, "{Out of Virtual Memory}\nYour system is low on virtual memory. To ensure that Windows runs properly, increase the size of your virtual memory paging file. For more information, see Help."), // STATUS_COMMITMENT_LIMIT
	StatusRecord::new(0xC000_012E, 193, 8, "The specified image file did not have the correct format, it appears to be LE format."), // STATUS_INVALID_IMAGE_LE_FORMAT
	StatusRecord::new(0xC000_012F, 193, 8, "The specified image file did not have the correct format, it did not have an initial MZ."), // STATUS_INVALID_IMAGE_NOT_MZ
	StatusRecord::new(0xC000_0130, 193, 8, "The specified image file did not have the correct format, it did not have a proper e_lfarlc in the MZ header."), // STATUS_INVALID_IMAGE_PROTECT
	StatusRecord::new(0xC000_0131, 193, 8, "The specified image file did not have the correct format, it appears to be a 16-bit Windows image."), // STATUS_INVALID_IMAGE_WIN_16
	StatusRecord::new(0xC000_0132, 568, 0, "The Netlogon service cannot start because another Netlogon service running in the domain conflicts with the specified role."), // STATUS_LOGON_SERVER_CONFLICT
	StatusRecord::new(0xC000_0133, 1398, 0, "The time at the Primary Domain Controller is different than the time at the Backup Domain Controller or member server by too large an amount."), // STATUS_TIME_DIFFERENCE_AT_DC
	StatusRecord::new(0xC000_0134, 569, 0, "The SAM database on a Windows Server is significantly out of synchronization with the copy on the Domain Controller. A complete synchronization is required."), // STATUS_SYNCHRONIZATION_REQUIRED
	StatusRecord::new(0xC000_0135, 126, 2, "The code execution cannot proceed because %hs was not found. Reinstalling the program may fix this problem."), // STATUS_DLL_NOT_FOUND
	StatusRecord::new(0xC000_0136, 110, 5, "The NtCreateFile API failed. This error should never be returned to an application, it is a place holder for the Windows Lan Manager Redirector to use in its internal error mapping routines."), // STATUS_OPEN_FAILED
	StatusRecord::new(0xC000_0137, 571, 0, "{Privilege Failed}\nThe I/O permissions for the process could not be changed."), // STATUS_IO_PRIVILEGE_FAILED
	StatusRecord::new(0xC000_0138, 182, 0, "{Ordinal Not Found}\nThe ordinal %ld could not be located in the dynamic link library %hs."), // STATUS_ORDINAL_NOT_FOUND
	StatusRecord::new(0xC000_0139, 127, 0, "{Entry Point Not Found}\nThe procedure entry point %hs could not be located in the dynamic link library %hs."), // STATUS_ENTRYPOINT_NOT_FOUND
	StatusRecord::new(0xC000_013A, 572, 0, "{Application Exit by CTRL+C}\nThe application terminated as a result of a CTRL+C."), // STATUS_CONTROL_C_EXIT
	StatusRecord::new(0xC000_013B, 64, 108, "{Virtual Circuit Closed}\nThe network transport on your computer has closed a network connection. There may or may not be I/O requests outstanding."), // STATUS_LOCAL_DISCONNECT
	StatusRecord::new(0xC000_013C, 64, 108, "{Virtual Circuit Closed}\nThe network transport on a remote computer has closed a network connection. There may or may not be I/O requests outstanding."), // STATUS_REMOTE_DISCONNECT
	StatusRecord::new(0xC000_013D, 51, 0, "{Insufficient Resources on Remote Computer}\nThe remote computer has insufficient resources to complete the network request. For instance, there may not be enough memory available on the remote computer to carry out the request at this time."), // STATUS_REMOTE_RESOURCES
	StatusRecord::new(0xC000_013E, 59, 5, "{Virtual Circuit Closed}\nAn existing connection (virtual circuit) has been broken at the remote computer. There is probably something wrong with the network software protocol or the network hardware on the remote computer."), // STATUS_LINK_FAILED
	StatusRecord::new(0xC000_013F, 59, 5, "{Virtual Circuit Closed}\nThe network transport on your computer has closed a network connection because it had to wait too long for a response from the remote computer."), // STATUS_LINK_TIMEOUT
	StatusRecord::new(0xC000_0140, 59, 5, "The connection handle given to the transport was invalid."), // STATUS_INVALID_CONNECTION
	StatusRecord::new(0xC000_0141, 59, 5, "The address handle given to the transport was invalid."), // STATUS_INVALID_ADDRESS
	StatusRecord::new(0xC000_0142, 1114, 0, "{DLL Initialization Failed}\nInitialization of the dynamic link library %hs failed. The process is terminating abnormally."), // STATUS_DLL_INIT_FAILED
	StatusRecord::new(0xC000_0143, 573, 0, "{Missing System File}\nThe required system file %hs is bad or missing."), // STATUS_MISSING_SYSTEMFILE
	StatusRecord::new(0xC000_0144, 574, 0, "{Application Error}\nThe exception %s (0x%08lx) occurred in the application at location 0x%08lx."), // STATUS_UNHANDLED_EXCEPTION
	StatusRecord::new(0xC000_0145, 575, 0, "{Application Error}\nThe application was unable to start correctly (0x%lx). Click OK to close the application."), // STATUS_APP_INIT_FAILURE
	StatusRecord::new(0xC000_0146, 576, 0, "{Unable to Create Paging File}\nThe creation of the paging file %hs failed (%lx). The requested size was %ld."), // STATUS_PAGEFILE_CREATE_FAILED
	StatusRecord::new(0xC000_0147, 578, 0, "{No Paging File Specified}\nNo paging file was specified in the system configuration."), // STATUS_NO_PAGEFILE
	StatusRecord::new(0xC000_0148, 124, 0, "{Incorrect System Call Level}\nAn invalid level was passed into the specified system call."), // STATUS_INVALID_LEVEL
	StatusRecord::new(0xC000_0149, 86, 0, "{Incorrect Password to LAN Manager Server}\nYou specified an incorrect password to a LAN Manager 2.x or MS-NET server."), // STATUS_WRONG_PASSWORD_CORE
	StatusRecord::new(0xC000_014A, 579, 0, "{EXCEPTION}\nA real-mode application issued a floating-point instruction and floating-point hardware is not present."), // STATUS_ILLEGAL_FLOAT_CONTEXT
	StatusRecord::new(0xC000_014B, 109, 32, "The pipe operation has failed because the other end of the pipe has been closed."), // STATUS_PIPE_BROKEN
	StatusRecord::new(0xC000_014C, 1015, 0, "{The Registry Is Corrupt}\nThe structure of one of the files that contains Registry data is corrupt, or the image of the file in memory is corrupt, or the file could not be recovered because the alternate copy or log was absent or corrupt."), // STATUS_REGISTRY_CORRUPT
	StatusRecord::new(0xC000_014D, 1016, 0, "An I/O operation initiated by the Registry failed unrecoverably.\nThe Registry could not read in, or write out, or flush, one of the files that contain the system's image of the Registry."), // STATUS_REGISTRY_IO_FAILED
	StatusRecord::new(0xC000_014E, 580, 0, "An event pair synchronization operation was performed using the thread specific client/server event pair object, but no event pair object was associated with the thread."), // STATUS_NO_EVENT_PAIR
	StatusRecord::new(0xC000_014F, 1005, 0, "The volume does not contain a recognized file system.\nPlease make sure that all required file system drivers are loaded and that the volume is not corrupt."), // STATUS_UNRECOGNIZED_VOLUME
	StatusRecord::new(0xC000_0150, 1118, 0, "No serial device was successfully initialized. The serial driver will unload."), // STATUS_SERIAL_NO_DEVICE_INITED
	StatusRecord::new(0xC000_0151, 1376, 0, "The specified local group does not exist."), // STATUS_NO_SUCH_ALIAS
	StatusRecord::new(0xC000_0152, 1377, 0, "The specified account name is not a member of the group."), // STATUS_MEMBER_NOT_IN_ALIAS
	StatusRecord::new(0xC000_0153, 1378, 0, "The specified account name is already a member of the group."), // STATUS_MEMBER_IN_ALIAS
	StatusRecord::new(0xC000_0154, 1379, 0, "The specified local group already exists."), // STATUS_ALIAS_EXISTS
	StatusRecord::new(0xC000_0155, 1380, 0, "A requested type of logon (e.g., Interactive, Network, Service) is not granted by the target system's local security policy.\nPlease ask the system administrator to grant the necessary form of logon."), // STATUS_LOGON_NOT_GRANTED
	StatusRecord::new(0xC000_0156, 1381, 0, "The maximum number of secrets that may be stored in a single system has been exceeded. The length and number of secrets is limited to satisfy United States State Department export restrictions."), // STATUS_TOO_MANY_SECRETS
	StatusRecord::new(0xC000_0157, 1382, 0, "The length of a secret exceeds the maximum length allowed. The length and number of secrets is limited to satisfy United States State Department export restrictions."), // STATUS_SECRET_TOO_LONG
	StatusRecord::new(0xC000_0158, 1383, 0, "The Local Security Authority (LSA) database contains an internal inconsistency."), // STATUS_INTERNAL_DB_ERROR
	StatusRecord::new(0xC000_0159, 1007, 0, "The requested operation cannot be performed in fullscreen mode."), // STATUS_FULLSCREEN_MODE
	StatusRecord::new(0xC000_015A, 1384, 0, "During a logon attempt, the user's security context accumulated too many security IDs. This is a very unusual situation.\nRemove the user from some global or local groups to reduce the number of security ids to incorporate into the security context."), // STATUS_TOO_MANY_CONTEXT_IDS
	StatusRecord::new(0xC000_015B, 1385, 0, "A user has requested a type of logon (e.g., interactive or network) that has not been granted. An administrator has control over who may logon interactively and through the network."), // STATUS_LOGON_TYPE_NOT_GRANTED
	StatusRecord::new(0xC000_015C, 1017, 0, "The system has attempted to load or restore a file into the registry, and the specified file is not in the format of a registry file."), // STATUS_NOT_REGISTRY_FILE
	StatusRecord::new(0xC000_015D, 1386, 0, "An attempt was made to change a user password in the security account manager without providing the necessary Windows cross-encrypted password."), // STATUS_NT_CROSS_ENCRYPTION_REQUIRED
	StatusRecord::new(0xC000_015E, 581, 0, "A Windows Server has an incorrect configuration."), // STATUS_DOMAIN_CTRLR_CONFIG_ERROR
	StatusRecord::new(0xC000_015F, 1117, 5, "An attempt was made to explicitly access the secondary copy of information via a device control to the Fault Tolerance driver and the secondary copy is not present in the system."), // STATUS_FT_MISSING_MEMBER
	StatusRecord::new(0xC000_0161, 582, 0, "An illegal character was encountered. For a multi-byte character set this includes a lead byte without a succeeding trail byte. For the Unicode character set this includes the characters 0xFFFF and 0xFFFE."), // STATUS_ILLEGAL_CHARACTER
	StatusRecord::new(0xC000_0162, 1113, 42, "No mapping for the Unicode character exists in the target multi-byte code page."), // STATUS_UNMAPPABLE_CHARACTER
	StatusRecord::new(0xC000_0163, 583, 0, "The Unicode character is not defined in the Unicode character set installed on the system."), // STATUS_UNDEFINED_CHARACTER
	StatusRecord::new(0xC000_0164, 584, 0, "The paging file cannot be created on a floppy diskette."), // STATUS_FLOPPY_VOLUME
	StatusRecord::new(0xC000_0165, 1122, 0, "{Floppy Disk Error}\nWhile accessing a floppy disk, an ID address mark was not found."), // STATUS_FLOPPY_ID_MARK_NOT_FOUND
	StatusRecord::new(0xC000_0166, 1123, 0, "{Floppy Disk Error}\nWhile accessing a floppy disk, the track address from the sector ID field was found to be different than the track address maintained by the controller."), // STATUS_FLOPPY_WRONG_CYLINDER
	StatusRecord::new(0xC000_0167, 1124, 0, "{Floppy Disk Error}\nThe floppy disk controller reported an error that is not recognized by the floppy disk driver."), // STATUS_FLOPPY_UNKNOWN_ERROR
	StatusRecord::new(0xC000_0168, 1125, 0, "{Floppy Disk Error}\nWhile accessing a floppy-disk, the controller returned inconsistent results via its registers."), // STATUS_FLOPPY_BAD_REGISTERS
	StatusRecord::new(0xC000_0169, 1126, 0, "{Hard Disk Error}\nWhile accessing the hard disk, a recalibrate operation failed, even after retries."), // STATUS_DISK_RECALIBRATE_FAILED
	StatusRecord::new(0xC000_016A, 1127, 0, "{Hard Disk Error}\nWhile accessing the hard disk, a disk operation failed even after retries."), // STATUS_DISK_OPERATION_FAILED
	StatusRecord::new(0xC000_016B, 1128, 0, "{Hard Disk Error}\nWhile accessing the hard disk, a disk controller reset was needed, but even that failed."), // STATUS_DISK_RESET_FAILED
	StatusRecord::new(0xC000_016C, 1119, 0, "An attempt was made to open a device that was sharing an IRQ with other devices.\nAt least one other device that uses that IRQ was already opened.\nTwo concurrent opens of devices that share an IRQ and only work via interrupts is not supported for the particular bus type that the devices use."), // STATUS_SHARED_IRQ_BUSY
	StatusRecord::new(0xC000_016D, 1117, 5, "{FT Orphaning}\nA disk that is part of a fault-tolerant volume can no longer be accessed."), // STATUS_FT_ORPHANING
	StatusRecord::new(0xC000_016E, 585, 0, "The system bios failed to connect a system interrupt to the device or bus for which the device is connected."), // STATUS_BIOS_FAILED_TO_CONNECT_INTERRUPT
	StatusRecord::new(0xC000_0172, 1105, 5, "Tape could not be partitioned."), // STATUS_PARTITION_FAILURE
	StatusRecord::new(0xC000_0173, 1106, 5, "When accessing a new tape of a multivolume partition, the current blocksize is incorrect."), // STATUS_INVALID_BLOCK_LENGTH
	StatusRecord::new(0xC000_0174, 1107, 5, "Tape partition information could not be found when loading a tape."), // STATUS_DEVICE_NOT_PARTITIONED
	StatusRecord::new(0xC000_0175, 1108, 5, "Attempt to lock the eject media mechanism fails."), // STATUS_UNABLE_TO_LOCK_MEDIA
	StatusRecord::new(0xC000_0176, 1109, 5, "Unload media fails."), // STATUS_UNABLE_TO_UNLOAD_MEDIA
	StatusRecord::new(0xC000_0177, 1129, 28, "Physical end of tape was detected."), // STATUS_EOM_OVERFLOW
	StatusRecord::new(0xC000_0178, 1112, 6, "{No Media}\nThere is no media in the drive.\nPlease insert media into drive %hs."), // STATUS_NO_MEDIA
	StatusRecord::new(0xC000_017A, 1387, 0, "A new member could not be added to or removed from the local group because the member does not exist."), // STATUS_NO_SUCH_MEMBER
	StatusRecord::new(0xC000_017B, 1388, 0, "A new member could not be added to a local group because the member has the wrong account type."), // STATUS_INVALID_MEMBER
	StatusRecord::new(0xC000_017C, 1018, 0, "Illegal operation attempted on a registry key which has been marked for deletion."), // STATUS_KEY_DELETED
	StatusRecord::new(0xC000_017D, 1019, 0, "System could not allocate required space in a registry log."), // STATUS_NO_LOG_SPACE
	StatusRecord::new(0xC000_017E, 1389, 0, "Too many Sids have been specified."), // STATUS_TOO_MANY_SIDS
	StatusRecord::new(0xC000_017F, 1390, 0, "An attempt was made to change a user password in the security account manager without providing the necessary LM cross-encrypted password."), // STATUS_LM_CROSS_ENCRYPTION_REQUIRED
	StatusRecord::new(0xC000_0180, 1020, 0, "An attempt was made to create a symbolic link in a registry key that already has subkeys or values."), // STATUS_KEY_HAS_CHILDREN
	StatusRecord::new(0xC000_0181, 1021, 0, "An attempt was made to create a Stable subkey under a Volatile parent key."), // STATUS_CHILD_MUST_BE_VOLATILE
	StatusRecord::new(0xC000_0182, 87, 22, "The I/O device is configured incorrectly or the configuration parameters to the driver are incorrect."), // STATUS_DEVICE_CONFIGURATION_ERROR
	StatusRecord::new(0xC000_0183, 1117, 5, "An error was detected between two drivers or within an I/O driver."), // STATUS_DRIVER_INTERNAL_ERROR
	StatusRecord::new(0xC000_0184, 22, 13, "The device is not in a valid state to perform this request."), // STATUS_INVALID_DEVICE_STATE
	StatusRecord::new(0xC000_0185, 1117, 5, "The I/O device reported an I/O error."), // STATUS_IO_DEVICE_ERROR
	StatusRecord::new(0xC000_0186, 1117, 5, "A protocol error was detected between the driver and the device."), // STATUS_DEVICE_PROTOCOL_ERROR
	StatusRecord::new(0xC000_0187, 586, 0, "This operation is only allowed for the Primary Domain Controller of the domain."), // STATUS_BACKUP_CONTROLLER
	StatusRecord::new(0xC000_0188, 1502, 0, "Log file space is insufficient to support this operation."), // STATUS_LOG_FILE_FULL
	StatusRecord::new(0xC000_0189, 19, 13, "A write operation was attempted to a volume after it was dismounted."), // STATUS_TOO_LATE
	StatusRecord::new(0xC000_018A, 1786, 0, "The workstation does not have a trust secret for the primary domain in the local LSA database."), // STATUS_NO_TRUST_LSA_SECRET
	StatusRecord::new(0xC000_018B, 1787, 0, "The SAM database on the Windows Server does not have a computer account for this workstation trust relationship."), // STATUS_NO_TRUST_SAM_ACCOUNT
	StatusRecord::new(0xC000_018C, 1788, 0, "The logon request failed because the trust relationship between the primary domain and the trusted domain failed."), // STATUS_TRUSTED_DOMAIN_FAILURE
	StatusRecord::new(0xC000_018D, 1789, 0, "The logon request failed because the trust relationship between this workstation and the primary domain failed."), // STATUS_TRUSTED_RELATIONSHIP_FAILURE
	StatusRecord::new(0xC000_018E, 1500, 0, "The Eventlog log file is corrupt."), // STATUS_EVENTLOG_FILE_CORRUPT
	StatusRecord::new(0xC000_018F, 1501, 0, "No Eventlog log file could be opened. The Eventlog service did not start."), // STATUS_EVENTLOG_CANT_START
	StatusRecord::new(0xC000_0190, 1790, 0, "The network logon failed. This may be because the validation authority can't be reached."), // STATUS_TRUST_FAILURE
	StatusRecord::new(0xC000_0191, 587, 0, "An attempt was made to acquire a mutant such that its maximum count would have been exceeded."), // STATUS_MUTANT_LIMIT_EXCEEDED
	StatusRecord::new(0xC000_0192, 1792, 0, "An attempt was made to logon, but the netlogon service was not started."), // STATUS_NETLOGON_NOT_STARTED
	StatusRecord::new(0xC000_0193, 1793, 0, "The user's account has expired."), // STATUS_ACCOUNT_EXPIRED
	StatusRecord::new(0xC000_0194, 1131, 36, "{EXCEPTION}\nPossible deadlock condition."), // STATUS_POSSIBLE_DEADLOCK
	StatusRecord::new(0xC000_0195, 1219, 0, "Multiple connections to a server or shared resource by the same user, using more than one user name, are not allowed. Disconnect all previous connections to the server or shared resource and try again."), // STATUS_NETWORK_CREDENTIAL_CONFLICT
	StatusRecord::new(0xC000_0196, 1220, 0, "An attempt was made to establish a session to a network server, but there are already too many sessions established to that server."), // STATUS_REMOTE_SESSION_LIMIT
	StatusRecord::new(0xC000_0197, 1503, 0, "The log file has changed between reads."), // STATUS_EVENTLOG_FILE_CHANGED
	StatusRecord::new(0xC000_0198, 1807, 0, "The account used is an Interdomain Trust account. Use your global user account or local user account to access this server."), // STATUS_NOLOGON_INTERDOMAIN_TRUST_ACCOUNT
	StatusRecord::new(0xC000_0199, 1808, 0, "The account used is a Computer Account. Use your global user account or local user account to access this server."), // STATUS_NOLOGON_WORKSTATION_TRUST_ACCOUNT
	StatusRecord::new(0xC000_019A, 1809, 0, "The account used is an Server Trust account. Use your global user account or local user account to access this server."), // STATUS_NOLOGON_SERVER_TRUST_ACCOUNT
	StatusRecord::new(0xC000_019B, 1810, 0, "The name or SID of the domain specified is inconsistent with the trust information for that domain."), // STATUS_DOMAIN_TRUST_INCONSISTENT
	StatusRecord::new(0xC000_019C, 588, 0, "A volume has been accessed for which a file system driver is required that has not yet been loaded."), // STATUS_FS_DRIVER_REQUIRED
	StatusRecord::new(0xC000_0202, 1394, 0, "There is no user session key for the specified logon session."), // STATUS_NO_USER_SESSION_KEY
	StatusRecord::new(0xC000_0203, 59, 5, "The remote user session has been deleted."), // STATUS_USER_SESSION_DELETED
	StatusRecord::new(0xC000_0204, 1815, 0, "Indicates the specified resource language ID cannot be found in the image file."), // STATUS_RESOURCE_LANG_NOT_FOUND
	StatusRecord::new(0xC000_0205, 1130, 12, "Insufficient server resources exist to complete the request."), // STATUS_INSUFF_SERVER_RESOURCES
	StatusRecord::new(0xC000_0206, 1784, 14, "The size of the buffer is invalid for the specified operation."), // STATUS_INVALID_BUFFER_SIZE
	StatusRecord::new(0xC000_0207, 1214, 22, "The transport rejected the network address specified as invalid."), // STATUS_INVALID_ADDRESS_COMPONENT
	StatusRecord::new(0xC000_0208, 1214, 22, "The transport rejected the network address specified due to an invalid use of a wildcard."), // STATUS_INVALID_ADDRESS_WILDCARD
	StatusRecord::new(0xC000_0209, 68, 0, "The transport address could not be opened because all the available addresses are in use."), // STATUS_TOO_MANY_ADDRESSES
	StatusRecord::new(0xC000_020A, 52, 0, "The transport address could not be opened because it already exists."), // STATUS_ADDRESS_ALREADY_EXISTS
	StatusRecord::new(0xC000_020B, 64, 108, "The transport address is now closed."), // STATUS_ADDRESS_CLOSED
	StatusRecord::new(0xC000_020C, 64, 108, "The transport connection is now disconnected."), // STATUS_CONNECTION_DISCONNECTED
	StatusRecord::new(0xC000_020D, 64, 108, "The transport connection has been reset."), // STATUS_CONNECTION_RESET
	StatusRecord::new(0xC000_020E, 68, 0, "The transport cannot dynamically acquire any more nodes."), // STATUS_TOO_MANY_NODES
	StatusRecord::new(0xC000_020F, 59, 5, "The transport aborted a pending transaction."), // STATUS_TRANSACTION_ABORTED
	StatusRecord::new(0xC000_0210, 59, 5, "The transport timed out a request waiting for a response."), // STATUS_TRANSACTION_TIMED_OUT
	StatusRecord::new(0xC000_0211, 59, 5, "The transport did not receive a release for a pending response."), // STATUS_TRANSACTION_NO_RELEASE
	StatusRecord::new(0xC000_0212, 59, 5, "The transport did not find a transaction matching the specific token."), // STATUS_TRANSACTION_NO_MATCH
	StatusRecord::new(0xC000_0213, 59, 5, "The transport had previously responded to a transaction request."), // STATUS_TRANSACTION_RESPONDED
	StatusRecord::new(0xC000_0214, 59, 5, "The transport does not recognized the transaction request identifier specified."), // STATUS_TRANSACTION_INVALID_ID
	StatusRecord::new(0xC000_0215, 59, 5, "The transport does not recognize the transaction request type specified."), // STATUS_TRANSACTION_INVALID_TYPE
	StatusRecord::new(0xC000_0216, 50, 129, "The transport can only process the specified request on the server side of a session."), // STATUS_NOT_SERVER_SESSION
	StatusRecord::new(0xC000_0217, 50, 129, "The transport can only process the specified request on the client side of a session."), // STATUS_NOT_CLIENT_SESSION
	StatusRecord::new(0xC000_0218, 589, 0, "{Registry File Failure}\nThe registry cannot load the hive (file):\n%hs\nor its log or alternate.\nIt is corrupt, absent, or not writable."), // STATUS_CANNOT_LOAD_REGISTRY_FILE
	StatusRecord::new(0xC000_0219, 590, 0, "{Unexpected Failure in DebugActiveProcess}\nAn unexpected failure occurred while processing a DebugActiveProcess API request. You may choose OK to terminate the process, or Cancel to ignore the error."), // STATUS_DEBUG_ATTACH_FAILED
	StatusRecord::new(0xC000_021A, 591, 0, "{Fatal System Error}\nThe %hs system process terminated unexpectedly with a status of 0x%08x (0x%08x 0x%08x).\nThe system has been shut down."), // STATUS_SYSTEM_PROCESS_TERMINATED
	StatusRecord::new(0xC000_021B, 592, 0, "{Data Not Accepted}\nThe TDI client could not handle the data received during an indication."), // STATUS_DATA_NOT_ACCEPTED
	StatusRecord::new(0xC000_021C, 6118, 0, "{Unable to Retrieve Browser Server List}\nThe list of servers for this workgroup is not currently available."), // STATUS_NO_BROWSER_SERVERS_FOUND
	StatusRecord::new(0xC000_021D, 593, 0, "NTVDM encountered a hard error."), // STATUS_VDM_HARD_ERROR
	StatusRecord::new(0xC000_021E, 594, 0, "{Cancel Timeout}\nThe driver %hs failed to complete a cancelled I/O request in the allotted time."), // STATUS_DRIVER_CANCEL_TIMEOUT
	StatusRecord::new(0xC000_021F, 595, 0, "{Reply Message Mismatch}\nAn attempt was made to reply to an LPC message, but the thread specified by the client ID in the message was not waiting on that message."), // STATUS_REPLY_MESSAGE_MISMATCH
	StatusRecord::new(0xC000_0220, 1132, 0, "{Mapped View Alignment Incorrect}\nAn attempt was made to map a view of a file, but either the specified base address or the offset into the file were not aligned on the proper allocation granularity."), // STATUS_MAPPED_ALIGNMENT
	StatusRecord::new(0xC000_0221, 193, 8, "{Bad Image Checksum}\nThe image %hs is possibly corrupt. The header checksum does not match the computed checksum."), // STATUS_IMAGE_CHECKSUM_MISMATCH
	StatusRecord::new(0xC000_0222, 596, 0, "{Delayed Write Failed}\nWindows was unable to save all the data for the file %hs. The data has been lost.\nThis error may be caused by a failure of your computer hardware or network connection. Please try to save this file elsewhere."), // STATUS_LOST_WRITEBEHIND_DATA
	StatusRecord::new(0xC000_0223, 597, 0, "The parameter(s) passed to the server in the client/server shared memory window were invalid. Too much data may have been put in the shared memory window."), // STATUS_CLIENT_SERVER_PARAMETERS_INVALID
	StatusRecord::new(0xC000_0224, 1907, 0, "The user's password must be changed before signing in."), // STATUS_PASSWORD_MUST_CHANGE
	StatusRecord::new(0xC000_0225, 1168, 2, "The object was not found."), // STATUS_NOT_FOUND
	StatusRecord::new(0xC000_0226, 598, 0, "The stream is not a tiny stream."), // STATUS_NOT_TINY_STREAM
	StatusRecord::new(0xC000_0227, 1279, 0, "A transaction recover failed."), // STATUS_RECOVERY_FAILURE
	StatusRecord::new(0xC000_0228, 599, 0, "The request must be handled by the stack overflow code."), // STATUS_STACK_OVERFLOW_READ
	StatusRecord::new(0xC000_022C, 600, 0, "Convert a tiny stream to a regular one."), // STATUS_CONVERT_TO_LARGE
	StatusRecord::new(0xC000_022D, 1237, 11, "The request needs to be retried."), // STATUS_RETRY
	StatusRecord::new(0xC000_022E, 601, 0, "The attempt to find the object found an object matching by ID on the volume but it is out of the scope of the handle used for the operation."), // STATUS_FOUND_OUT_OF_SCOPE
	StatusRecord::new(0xC000_022F, 602, 0, "The bucket array must be grown. Retry transaction after doing so."), // STATUS_ALLOCATE_BUCKET
	StatusRecord::new(0xC000_0230, 1168, 2, "The property set specified does not exist on the object."), // STATUS_PROPSET_NOT_FOUND
	StatusRecord::new(0xC000_0231, 603, 0, "The user/kernel marshalling buffer has overflowed."), // STATUS_MARSHALL_OVERFLOW
	StatusRecord::new(0xC000_0232, 604, 0, "The supplied variant structure contains invalid data."), // STATUS_INVALID_VARIANT
	StatusRecord::new(0xC000_0233, 1908, 0, "Could not find a domain controller for this domain."), // STATUS_DOMAIN_CONTROLLER_NOT_FOUND
	StatusRecord::new(0xC000_0234, 1909, 0, "The user account has been automatically locked because too many invalid logon attempts or password change attempts have been requested."), // STATUS_ACCOUNT_LOCKED_OUT
	StatusRecord::new(0xC000_0235, 6, 9, "NtClose was called on a handle that was protected from close via NtSetInformationObject."), // STATUS_HANDLE_NOT_CLOSABLE
	StatusRecord::new(0xC000_0236, 1225, 107, "The transport connection attempt was refused by the remote system."), // STATUS_CONNECTION_REFUSED
	StatusRecord::new(0xC000_0237, 1226, 32, "The transport connection was gracefully closed."), // STATUS_GRACEFUL_DISCONNECT
	StatusRecord::new(0xC000_0238, 1227, 100, "The transport endpoint already has an address associated with it."), // STATUS_ADDRESS_ALREADY_ASSOCIATED
	StatusRecord::new(0xC000_0239, 1228, 101, "An address has not yet been associated with the transport endpoint."), // STATUS_ADDRESS_NOT_ASSOCIATED
	StatusRecord::new(0xC000_023A, 1229, 126, "An operation was attempted on a nonexistent transport connection."), // STATUS_CONNECTION_INVALID
	StatusRecord::new(0xC000_023B, 1230, 113, "An invalid operation was attempted on an active transport connection."), // STATUS_CONNECTION_ACTIVE
	StatusRecord::new(0xC000_023C, 1231, 118, "The remote network is not reachable by the transport."), // STATUS_NETWORK_UNREACHABLE
	StatusRecord::new(0xC000_023D, 1232, 110, "The remote system is not reachable by the transport."), // STATUS_HOST_UNREACHABLE
	StatusRecord::new(0xC000_023E, 1233, 118, "The remote system does not support the transport protocol."), // STATUS_PROTOCOL_UNREACHABLE
	StatusRecord::new(0xC000_023F, 1234, 107, "No service is operating at the destination port of the transport on the remote system."), // STATUS_PORT_UNREACHABLE
	StatusRecord::new(0xC000_0240, 1235, 105, "The request was aborted."), // STATUS_REQUEST_ABORTED
	StatusRecord::new(0xC000_0241, 1236, 106, "The transport connection was aborted by the local system."), // STATUS_CONNECTION_ABORTED
	StatusRecord::new(0xC000_0242, 605, 0, "The specified buffer contains ill-formed data."), // STATUS_BAD_COMPRESSION_BUFFER
	StatusRecord::new(0xC000_0243, 1224, 13, "The requested operation cannot be performed on a file with a user mapped section open."), // STATUS_USER_MAPPED_FILE
	StatusRecord::new(0xC000_0244, 606, 0, "{Audit Failed}\nAn attempt to generate a security audit failed."), // STATUS_AUDIT_FAILED
	StatusRecord::new(0xC000_0245, 607, 0, "The timer resolution was not previously set by the current process."), // STATUS_TIMER_RESOLUTION_NOT_SET
	StatusRecord::new(0xC000_0246, 1238, 0, "A connection to the server could not be made because the limit on the number of concurrent connections for this account has been reached."), // STATUS_CONNECTION_COUNT_LIMIT
	StatusRecord::new(0xC000_0247, 1239, 0, "Attempting to login during an unauthorized time of day for this account."), // STATUS_LOGIN_TIME_RESTRICTION
	StatusRecord::new(0xC000_0248, 1240, 0, "The account is not authorized to login from this station."), // STATUS_LOGIN_WKSTA_RESTRICTION
	StatusRecord::new(0xC000_0249, 193, 8, "{UP/MP Image Mismatch}\nThe image %hs has been modified for use on a uniprocessor system, but you are running it on a multiprocessor machine.\nPlease reinstall the image file."), // STATUS_IMAGE_MP_UP_MISMATCH
	StatusRecord::new(0xC000_0250, 608, 0, "There is insufficient account information to log you on."), // STATUS_INSUFFICIENT_LOGON_INFO
	StatusRecord::new(0xC000_0251, 609, 0, "{Invalid DLL Entrypoint}\nThe dynamic link library %hs is not written correctly. The stack pointer has been left in an inconsistent state.\nThe entrypoint should be declared as WINAPI or STDCALL. Select YES to fail the DLL load. Select NO to continue execution. Selecting NO may cause the application to operate incorrectly."), // STATUS_BAD_DLL_ENTRYPOINT
	StatusRecord::new(0xC000_0252, 610, 0, "{Invalid Service Callback Entrypoint}\nThe %hs service is not written correctly. The stack pointer has been left in an inconsistent state.\nThe callback entrypoint should be declared as WINAPI or STDCALL. Selecting OK will cause the service to continue operation. However, the service process may operate incorrectly."), // STATUS_BAD_SERVICE_ENTRYPOINT
	StatusRecord::new(0xC000_0254, 611, 0, "There is an IP address conflict with another system on the network"), // STATUS_IP_ADDRESS_CONFLICT1
	StatusRecord::new(0xC000_0255, 612, 0, "There is an IP address conflict with another system on the network"), // STATUS_IP_ADDRESS_CONFLICT2
	StatusRecord::new(0xC000_0256, 613, 0, "{Low On Registry Space}\nThe system has reached the maximum size allowed for the system part of the registry. Additional storage requests will be ignored."), // STATUS_REGISTRY_QUOTA_LIMIT
	StatusRecord::new(0xC000_0257, 3, 2, "The contacted server does not support the indicated part of the DFS namespace."), // STATUS_PATH_NOT_COVERED
	StatusRecord::new(0xC000_0258, 614, 0, "A callback return system service cannot be executed when no callback is active."), // STATUS_NO_CALLBACK_ACTIVE
	StatusRecord::new(0xC000_0259, 1395, 0, "The service being accessed is licensed for a particular number of connections.\nNo more connections can be made to the service at this time because there are already as many connections as the service can accept."), // STATUS_LICENSE_QUOTA_EXCEEDED
	StatusRecord::new(0xC000_025A, 615, 0, "The password provided is too short to meet the policy of your user account.\nPlease choose a longer password."), // STATUS_PWD_TOO_SHORT
	StatusRecord::new(0xC000_025B, 616, 0, "The policy of your user account does not allow you to change passwords too frequently.\nThis is done to prevent users from changing back to a familiar, but potentially discovered, password.\nIf you feel your password has been compromised then please contact your administrator immediately to have a new one assigned."), // STATUS_PWD_TOO_RECENT
	StatusRecord::new(0xC000_025C, 617, 0, "You have attempted to change your password to one that you have used in the past.\nThe policy of your user account does not allow this. Please select a password that you have not previously used."), // STATUS_PWD_HISTORY_CONFLICT
	StatusRecord::new(0xC000_025E, 1058, 0, "You have attempted to load a legacy device driver while its device instance had been disabled."), // STATUS_PLUGPLAY_NO_DEVICE
	StatusRecord::new(0xC000_025F, 618, 0, "The specified compression format is unsupported."), // STATUS_UNSUPPORTED_COMPRESSION
	StatusRecord::new(0xC000_0260, 619, 0, "The specified hardware profile configuration is invalid."), // STATUS_INVALID_HW_PROFILE
	StatusRecord::new(0xC000_0261, 620, 0, "The specified Plug and Play registry device path is invalid."), // STATUS_INVALID_PLUGPLAY_DEVICE_PATH
	StatusRecord::new(0xC000_0262, 182, 0, "{Driver Entry Point Not Found}\nThe %hs device driver could not locate the ordinal %ld in driver %hs."), // STATUS_DRIVER_ORDINAL_NOT_FOUND
	StatusRecord::new(0xC000_0263, 127, 0, "{Driver Entry Point Not Found}\nThe %hs device driver could not locate the entry point %hs in driver %hs."), // STATUS_DRIVER_ENTRYPOINT_NOT_FOUND
	StatusRecord::new(0xC000_0264, 288, 1, "{Application Error}\nThe application attempted to release a resource it did not own. Click OK to terminate the application."), // STATUS_RESOURCE_NOT_OWNED
	StatusRecord::new(0xC000_0265, 1142, 31, "An attempt was made to create more links on a file than the file system supports."), // STATUS_TOO_MANY_LINKS
	StatusRecord::new(0xC000_0266, 621, 0, "The specified quota list is internally inconsistent with its descriptor."), // STATUS_QUOTA_LIST_INCONSISTENT
	StatusRecord::new(0xC000_0267, 4350, 0, "The specified file has been relocated to offline storage."), // STATUS_FILE_IS_OFFLINE
	StatusRecord::new(0xC000_0268, 622, 0, "{Windows Evaluation Notification}\nThe evaluation period for this installation of Windows has expired. This system will shutdown in 1 hour. To restore access to this installation of Windows, please upgrade this installation using a licensed distribution of this product."), // STATUS_EVALUATION_EXPIRATION
	StatusRecord::new(0xC000_0269, 623, 0, "{Illegal System DLL Relocation}\nThe system DLL %hs was relocated in memory. The application will not run properly.\nThe relocation occurred because the DLL %hs occupied an address range reserved for Windows system DLLs. The vendor supplying the DLL should be contacted for a new DLL."), // STATUS_ILLEGAL_DLL_RELOCATION
	StatusRecord::new(0xC000_026B, 624, 0, "{DLL Initialization Failed}\nThe application failed to initialize because the window station is shutting down."), // STATUS_DLL_INIT_FAILED_LOGOFF
	StatusRecord::new(0xC000_026E, 21, 13, "An operation was attempted to a volume after it was dismounted."), // STATUS_VOLUME_DISMOUNTED
	StatusRecord::new(0xC000_0271, 625, 0, "The validation process needs to continue on to the next step."), // STATUS_VALIDATE_CONTINUE
	StatusRecord::new(0xC000_0272, 1169, 0, "There was no match for the specified key in the index."), // STATUS_NO_MATCH
	StatusRecord::new(0xC000_0273, 626, 0, "There are no more matches for the current index enumeration."), // STATUS_NO_MORE_MATCHES
	StatusRecord::new(0xC000_0275, 4390, 22, "The NTFS file or directory is not a reparse point."), // STATUS_NOT_A_REPARSE_POINT
	StatusRecord::new(0xC000_0276, 4393, 22, "The Windows I/O reparse tag passed for the NTFS reparse point is invalid."), // STATUS_IO_REPARSE_TAG_INVALID
	StatusRecord::new(0xC000_0277, 4394, 22, "The Windows I/O reparse tag does not match the one present in the NTFS reparse point."), // STATUS_IO_REPARSE_TAG_MISMATCH
	StatusRecord::new(0xC000_0278, 4392, 22, "The user data passed for the NTFS reparse point is invalid."), // STATUS_IO_REPARSE_DATA_INVALID
	StatusRecord::new(0xC000_0279, 1920, 13, "The layered file system driver for this IO tag did not handle it when needed."), // STATUS_IO_REPARSE_TAG_NOT_HANDLED
	StatusRecord::new(0xC000_0280, 1921, 114, "The NTFS symbolic link could not be resolved even though the initial file name is valid."), // STATUS_REPARSE_POINT_NOT_RESOLVED
	StatusRecord::new(0xC000_0282, 627, 0, "The range could not be added to the range list because of a conflict."), // STATUS_RANGE_LIST_CONFLICT
	StatusRecord::new(0xC000_0283, 1160, 0, "The specified medium changer source element contains no media."), // STATUS_SOURCE_ELEMENT_EMPTY
	StatusRecord::new(0xC000_0284, 1161, 0, "The specified medium changer destination element already contains media."), // STATUS_DESTINATION_ELEMENT_FULL
	StatusRecord::new(0xC000_0285, 1162, 0, "The specified medium changer element does not exist."), // STATUS_ILLEGAL_ELEMENT_ADDRESS
	StatusRecord::new(0xC000_0286, 1163, 0, "The specified element is contained within a magazine that is no longer present."), // STATUS_MAGAZINE_NOT_PRESENT
	StatusRecord::new(0xC000_0287, 1164, 0, "The device requires reinitialization due to hardware errors."), // STATUS_REINITIALIZATION_NEEDED
	StatusRecord::new(0xC000_028A, 6000, 0, "The file encryption attempt failed."), // STATUS_ENCRYPTION_FAILED
	StatusRecord::new(0xC000_028B, 6001, 0, "The file decryption attempt failed."), // STATUS_DECRYPTION_FAILED
	StatusRecord::new(0xC000_028C, 644, 0, "The specified range could not be found in the range list."), // STATUS_RANGE_NOT_FOUND
	StatusRecord::new(0xC000_028D, 6003, 0, "There is no encryption recovery policy configured for this system."), // STATUS_NO_RECOVERY_POLICY
	StatusRecord::new(0xC000_028E, 6004, 0, "The required encryption driver is not loaded for this system."), // STATUS_NO_EFS
	StatusRecord::new(0xC000_028F, 6005, 0, "The file was encrypted with a different encryption driver than is currently loaded."), // STATUS_WRONG_EFS
	StatusRecord::new(0xC000_0290, 6006, 0, "There are no EFS keys defined for the user."), // STATUS_NO_USER_KEYS
	StatusRecord::new(0xC000_0291, 6007, 0, "The specified file is not encrypted."), // STATUS_FILE_NOT_ENCRYPTED
	StatusRecord::new(0xC000_0292, 6008, 0, "The specified file is not in the defined EFS export format."), // STATUS_NOT_EXPORT_FORMAT
	StatusRecord::new(0xC000_0293, 6002, 0, "The specified file is encrypted and the user does not have the ability to decrypt it."), // STATUS_FILE_ENCRYPTED
	StatusRecord::new(0xC000_0295, 4200, 0, "The guid passed was not recognized as valid by a WMI data provider."), // STATUS_WMI_GUID_NOT_FOUND
	StatusRecord::new(0xC000_0296, 4201, 0, "The instance name passed was not recognized as valid by a WMI data provider."), // STATUS_WMI_INSTANCE_NOT_FOUND
	StatusRecord::new(0xC000_0297, 4202, 0, "The data item id passed was not recognized as valid by a WMI data provider."), // STATUS_WMI_ITEMID_NOT_FOUND
	StatusRecord::new(0xC000_0298, 4203, 0, "The WMI request could not be completed and should be retried."), // STATUS_WMI_TRY_AGAIN
	StatusRecord::new(0xC000_0299, 8218, 0, "The policy object is shared and can only be modified at the root"), // STATUS_SHARED_POLICY
	StatusRecord::new(0xC000_029A, 8219, 0, "The policy object does not exist when it should"), // STATUS_POLICY_OBJECT_NOT_FOUND
	StatusRecord::new(0xC000_029B, 8220, 0, "The requested policy information only lives in the Ds"), // STATUS_POLICY_ONLY_IN_DS
	StatusRecord::new(0xC000_029D, 4351, 0, "The remote storage service is not operational at this time."), // STATUS_REMOTE_STORAGE_NOT_ACTIVE
	StatusRecord::new(0xC000_029E, 4352, 0, "The remote storage service encountered a media error."), // STATUS_REMOTE_STORAGE_MEDIA_ERROR
	StatusRecord::new(0xC000_029F, 1172, 0, "The tracking (workstation) service is not running."), // STATUS_NO_TRACKING_SERVICE
	StatusRecord::new(0xC000_02A0, 628, 0, "The server process is running under a SID different than that required by client."), // STATUS_SERVER_SID_MISMATCH
	StatusRecord::new(0xC000_02B6, 1617, 0, "The device has been removed."), // STATUS_DEVICE_REMOVED
	StatusRecord::new(0xC000_02C4, 636, 0, "The device instance has been disabled and restarted.\nThe caller must enumerate the devices again."), // STATUS_PNP_RESTART_ENUMERATION
	StatusRecord::new(0xC000_02C5, 998, 14, "{EXCEPTION}\nAlignment Error\nA datatype misalignment error was detected in a load or store instruction."), // STATUS_DATATYPE_MISALIGNMENT_ERROR
	StatusRecord::new(0xC000_02C6, 4213, 0, "The WMI data item or data block is read only."), // STATUS_WMI_READ_ONLY
	StatusRecord::new(0xC000_02C7, 4214, 0, "The WMI data item or data block could not be changed."), // STATUS_WMI_SET_FAILURE
	StatusRecord::new(0xC000_02C8, 635, 0, "{Virtual Memory Minimum Too Low}\nYour system is low on virtual memory. Windows is increasing the size of your virtual memory paging file.\nDuring this process, memory requests for some applications may be denied. For more information, see Help."), // STATUS_COMMITMENT_MINIMUM
	StatusRecord::new(0xC000_02CA, 4328, 0, "The medium changer's transport element contains media, which is causing the operation to fail."), // STATUS_TRANSPORT_FULL
	StatusRecord::new(0xC000_02CE, 638, 0, "The device will not start without a reboot."), // STATUS_PNP_REBOOT_REQUIRED
	StatusRecord::new(0xC000_02EA, 82, 13, "An attempt to create a file or directory failed because the directory or file cannot be made."), // STATUS_CANNOT_MAKE
	StatusRecord::new(0xC000_0300, 1254, 0, "The operation is not supported on Small Business Server."), // STATUS_NOT_SUPPORTED_ON_SBS
	StatusRecord::new(0xC000_0301, 4207, 0, "The WMI GUID is no longer available."), // STATUS_WMI_GUID_DISCONNECTED
	StatusRecord::new(0xC000_0302, 4208, 0, "Collection or events for the WMI GUID is already disabled."), // STATUS_WMI_ALREADY_DISABLED
	StatusRecord::new(0xC000_0303, 4209, 0, "Collection or events for the WMI GUID is already enabled."), // STATUS_WMI_ALREADY_ENABLED
	StatusRecord::new(0xC000_0304, 302, 0, "The master file table on the volume is too fragmented to complete this operation."), // STATUS_MFT_TOO_FRAGMENTED
	StatusRecord::new(0xC000_0305, 317, 0, "Copy protection failure."), // STATUS_COPY_PROTECTION_FAILURE
	StatusRecord::new(0xC000_0306, 317, 0, "Copy protection error-DVD CSS Authentication failed."), // STATUS_CSS_AUTHENTICATION_FAILURE
	StatusRecord::new(0xC000_0307, 317, 0, "Copy protection error-The specified sector does not contain a valid key."), // STATUS_CSS_KEY_NOT_PRESENT
	StatusRecord::new(0xC000_0308, 317, 0, "Copy protection error-DVD session key not established."), // STATUS_CSS_KEY_NOT_ESTABLISHED
	StatusRecord::new(0xC000_0309, 317, 0, "Copy protection error-The read failed because the sector is encrypted."), // STATUS_CSS_SCRAMBLED_SECTOR
	StatusRecord::new(0xC000_030A, 317, 0, "Copy protection error-The region of the specified DVD does not correspond to the region setting of the drive."), // STATUS_CSS_REGION_MISMATCH
	StatusRecord::new(0xC000_030B, 317, 0, "Copy protection error-The region setting of the drive may be permanent."), // STATUS_CSS_RESETS_EXHAUSTED
	StatusRecord::new(0xC000_030C, 1938, 0, "The password provided is too short to meet the policy of your user account. Choose a longer password."), // STATUS_PASSWORD_CHANGE_REQUIRED
	StatusRecord::new(0xC000_030D, 317, 0, "The user account has been automatically locked because it has been put into lost mode."), // STATUS_LOST_MODE_LOGON_RESTRICTION
	StatusRecord::new(0xC000_0320, 1263, 0, "The Kerberos protocol encountered an error while validating the KDC certificate during smart card logon. There is more information in the system event log."), // STATUS_PKINIT_FAILURE
	StatusRecord::new(0xC000_0321, 1264, 0, "The Kerberos protocol encountered an error while attempting to use the smart card subsystem."), // STATUS_SMARTCARD_SUBSYSTEM_FAILURE
	StatusRecord::new(0xC000_0322, 1789, 0, "The target server does not have acceptable Kerberos credentials."), // STATUS_NO_KERB_KEY
	StatusRecord::new(0xC000_0350, 1256, 0, "The transport determined that the remote system is down."), // STATUS_HOST_DOWN
	StatusRecord::new(0xC000_0351, 1266, 0, "An unsupported pre-authentication mechanism was presented to the Kerberos package."), // STATUS_UNSUPPORTED_PREAUTH
	StatusRecord::new(0xC000_0352, 6013, 0, "The encryption algorithm that is used on the source file needs a bigger key buffer than the one that is used on the destination file."), // STATUS_EFS_ALG_BLOB_TOO_BIG
	StatusRecord::new(0xC000_0353, 0xC000_0353, 0, "An attempt to remove a processes DebugPort was made, but a port was not already associated with the process."), // STATUS_PORT_NOT_SET
	StatusRecord::new(0xC000_0354, 1286, 0, "An attempt to do an operation on a debug port failed because the port is in the process of being deleted."), // STATUS_DEBUGGER_INACTIVE
	StatusRecord::new(0xC000_0355, 8599, 0, "This version of Windows is not compatible with the behavior version of the directory forest, domain, or domain controller."), // STATUS_DS_VERSION_CHECK_FAILURE
	StatusRecord::new(0xC000_0356, 1287, 0, "The specified event is currently not being audited."), // STATUS_AUDITING_DISABLED
	StatusRecord::new(0xC000_0357, 8639, 0, "The machine account was created prior to Windows NT 4.0. The account needs to be recreated."), // STATUS_PRENT4_MACHINE_ACCOUNT
	StatusRecord::new(0xC000_0358, 8526, 0, "An account group cannot have a universal group as a member."), // STATUS_DS_AG_CANT_HAVE_UNIVERSAL_MEMBER
	StatusRecord::new(0xC000_0359, 193, 8, "The specified image file did not have the correct format; it appears to be a 32-bit Windows image."), // STATUS_INVALID_IMAGE_WIN_32
	StatusRecord::new(0xC000_035A, 193, 8, "The specified image file did not have the correct format; it appears to be a 64-bit Windows image."), // STATUS_INVALID_IMAGE_WIN_64
	StatusRecord::new(0xC000_035B, 1788, 0, "The client's supplied SSPI channel bindings were incorrect."), // STATUS_BAD_BINDINGS
	StatusRecord::new(0xC000_035C, 1311, 0, "The client session has expired; so the client must re-authenticate to continue accessing the remote resources."), // STATUS_NETWORK_SESSION_EXPIRED
	StatusRecord::new(0xC000_035D, 1259, 0, "The AppHelp dialog box canceled; thus preventing the application from starting."), // STATUS_APPHELP_BLOCK
	StatusRecord::new(0xC000_035E, 8542, 0, "The SID filtering operation removed all SIDs."), // STATUS_ALL_SIDS_FILTERED
	StatusRecord::new(0xC000_035F, 646, 0, "The driver was not loaded because the system is starting in safe mode."), // STATUS_NOT_SAFE_MODE_DRIVER
	StatusRecord::new(0xC000_0361, 1260, 0, "Access to %1 has been restricted by your Administrator by the default software restriction policy level."), // STATUS_ACCESS_DISABLED_BY_POLICY_DEFAULT
	StatusRecord::new(0xC000_0362, 1261, 0, "Access to %1 has been restricted by your Administrator by location with policy rule %2 placed on path %3"), // STATUS_ACCESS_DISABLED_BY_POLICY_PATH
	StatusRecord::new(0xC000_0363, 1262, 0, "Access to %1 has been restricted by your Administrator by software publisher policy."), // STATUS_ACCESS_DISABLED_BY_POLICY_PUBLISHER
	StatusRecord::new(0xC000_0364, 1263, 0, "Access to %1 has been restricted by your Administrator by policy rule %2."), // STATUS_ACCESS_DISABLED_BY_POLICY_OTHER
	StatusRecord::new(0xC000_0365, 647, 0, "The driver %hs failed to load."), // STATUS_FAILED_DRIVER_ENTRY
	StatusRecord::new(0xC000_0366, 648, 0, "The device encountered an error while applying power or reading the device configuration.\nThis may be caused by a failure of your hardware or by a poor connection."), // STATUS_DEVICE_ENUMERATION_ERROR
	StatusRecord::new(0xC000_0367, 0xC000_0367, 0, "The system failed to switch stacks."), // STATUS_FAILED_STACK_SWITCH
	StatusRecord::new(0xC000_0368, 649, 0, "The create operation failed because the name contained at least one mount point which resolves to a volume to which the specified device object is not attached."), // STATUS_MOUNT_POINT_NOT_RESOLVED
	StatusRecord::new(0xC000_0369, 650, 0, "The device object parameter is either not a valid device object or is not attached to the volume specified by the file name."), // STATUS_INVALID_DEVICE_OBJECT_PARAMETER
	StatusRecord::new(0xC000_036A, 651, 0, "A Machine Check Error has occurred. Please check the system eventlog for additional information."), // STATUS_MCA_OCCURED
	StatusRecord::new(0xC000_036B, 1275, 0, "Driver %2 has been blocked from loading."), // STATUS_DRIVER_BLOCKED_CRITICAL
	StatusRecord::new(0xC000_036C, 1275, 0, "Driver %2 has been blocked from loading."), // STATUS_DRIVER_BLOCKED
	StatusRecord::new(0xC000_036D, 652, 0, "There was error [%2] processing the driver database."), // STATUS_DRIVER_DATABASE_ERROR
	StatusRecord::new(0xC000_036E, 653, 0, "System hive size has exceeded its limit."), // STATUS_SYSTEM_HIVE_TOO_LARGE
	StatusRecord::new(0xC000_036F, 1276, 0, "A dynamic link library (DLL) referenced a module that was neither a DLL nor the process's executable image."), // STATUS_INVALID_IMPORT_OF_NON_DLL
	StatusRecord::new(0xC000_0370, 8620, 0, "The local account store does not contain secret material for the specified account."), // STATUS_NO_SECRETS
	StatusRecord::new(0xC000_0372, 786, 0, "Access to %1 has been restricted by your Administrator by policy rule %2."), // STATUS_ACCESS_DISABLED_NO_SAFER_UI_BY_POLICY
	StatusRecord::new(0xC000_0374, 0xC000_0374, 0, "A heap has been corrupted."), // STATUS_HEAP_CORRUPTION
	StatusRecord::new(0xC000_0375, 1326, 0, "An incorrect PIN was presented to the smart card."), // STATUS_SMARTCARD_WRONG_PIN
	StatusRecord::new(0xC000_0376, 1314, 1, "The smart card is blocked."), // STATUS_SMARTCARD_CARD_BLOCKED
	StatusRecord::new(0xC000_0377, 1226, 32, "No PIN was presented to the smart card."), // STATUS_SMARTCARD_CARD_NOT_AUTHENTICATED
	StatusRecord::new(0xC000_0378, 1168, 2, "No smart card is available."), // STATUS_SMARTCARD_NO_CARD
	StatusRecord::new(0xC000_0379, 2, 2, "The requested key container does not exist on the smart card."), // STATUS_SMARTCARD_NO_KEY_CONTAINER
	StatusRecord::new(0xC000_037A, 2, 2, "The requested certificate does not exist on the smart card."), // STATUS_SMARTCARD_NO_CERTIFICATE
	StatusRecord::new(0xC000_037B, 1168, 2, "The requested keyset does not exist."), // STATUS_SMARTCARD_NO_KEYSET
	StatusRecord::new(0xC000_037C, 1117, 5, "A communication error with the smart card has been detected."), // STATUS_SMARTCARD_IO_ERROR
	StatusRecord::new(0xC000_037E, 1265, 0, "The smart card certificate used for authentication has been revoked. Contact your system administrator. There might be additional information in the event log."), // STATUS_SMARTCARD_CERT_REVOKED
	StatusRecord::new(0xC000_037F, 1265, 0, "An untrusted certificate authority was detected while processing the smart card certificate that is used for authentication. Contact your system administrator."), // STATUS_ISSUING_CA_UNTRUSTED
	StatusRecord::new(0xC000_0380, 1265, 0, "The revocation status of the smart card certificate that is used for authentication could not be determined. Contact your system administrator."), // STATUS_REVOCATION_OFFLINE_C
	StatusRecord::new(0xC000_0381, 1265, 0, "The smart card certificate used for authentication was not trusted. Contact your system administrator."), // STATUS_PKINIT_CLIENT_FAILURE
	StatusRecord::new(0xC000_0382, 1265, 0, "The smart card certificate used for authentication has expired. Contact your system administrator."), // STATUS_SMARTCARD_CERT_EXPIRED
	StatusRecord::new(0xC000_0384, 1314, 1, "The smart card provider could not perform the action because the context was acquired as silent."), // STATUS_SMARTCARD_SILENT_CONTEXT
	StatusRecord::new(0xC000_0385, 1168, 2, "The smart card resource manager has lost the context."), // STATUS_SMARTCARD_CONTEXT_LOST
	StatusRecord::new(0xC000_0386, 1168, 2, "The smart card resource manager is not running."), // STATUS_SMARTCARD_RESOURCE_MANAGER_STOPPED
	StatusRecord::new(0xC000_0387, 1168, 2, "The smart card has been removed."), // STATUS_SMARTCARD_CARD_REMOVED
	StatusRecord::new(0xC000_0388, 1265, 0, "The system cannot contact a domain controller to service the authentication request. Please try again later."), // STATUS_DOWNGRADE_DETECTED
	StatusRecord::new(0xC000_0389, 1265, 0, "The smart card certificate used for authentication was revoked by a context-specific revocation check."), // STATUS_SMARTCARD_CERT_REVOKED_CONTEXT
	StatusRecord::new(0xC000_038B, 1266, 0, "The smart card does not support the requested cryptographic algorithm."), // STATUS_SMARTCARD_UNSUPPORTED_ALGORITHM
	StatusRecord::new(0xC000_038C, 1265, 0, "The Kerberos protocol encountered an error while validating the peer certificate."), // STATUS_PKU2U_CERT_FAILURE
	StatusRecord::new(0xC000_038E, 654, 0, "The driver could not be loaded because a previous version of the driver is still in memory."), // STATUS_DRIVER_FAILED_PRIOR_UNLOAD
	StatusRecord::new(0xC000_038F, 1385, 0, "A smart card logon is required for this account."), // STATUS_SMARTCARD_LOGON_REQUIRED
	StatusRecord::new(0xC000_0390, 317, 0, "The SMI primitive installer failed."), // STATUS_SMI_PRIMITIVE_INSTALLER_FAILED
	StatusRecord::new(0xC000_0391, 317, 0, "The generic command executable returned a result that indicates failure."), // STATUS_GENERIC_COMMAND_FAILED
	StatusRecord::new(0xC000_0394, 1290, 0, "The volume must be upgraded to enable this feature."), // STATUS_VOLUME_NOT_UPGRADED
	StatusRecord::new(0xC000_0399, 8203, 0, "The specified directory service attribute or value does not exist."), // STATUS_DS_NO_ATTRIBUTE_OR_VALUE
	StatusRecord::new(0xC000_039A, 8205, 0, "The attribute syntax specified to the directory service is invalid."), // STATUS_DS_INVALID_ATTRIBUTE_SYNTAX
	StatusRecord::new(0xC000_039B, 8204, 0, "The attribute type specified to the directory service is not defined."), // STATUS_DS_ATTRIBUTE_TYPE_UNDEFINED
	StatusRecord::new(0xC000_039C, 8206, 0, "The specified directory service attribute or value already exists."), // STATUS_DS_ATTRIBUTE_OR_VALUE_EXISTS
	StatusRecord::new(0xC000_039D, 8206, 0, "The directory service is busy."), // STATUS_DS_BUSY
	StatusRecord::new(0xC000_039E, 8207, 0, "The directory service is unavailable."), // STATUS_DS_UNAVAILABLE
	StatusRecord::new(0xC000_039F, 8208, 0, "The directory service was unable to allocate a relative identifier."), // STATUS_DS_NO_RIDS_ALLOCATED
	StatusRecord::new(0xC000_03A0, 8209, 0, "The directory service has exhausted the pool of relative identifiers."), // STATUS_DS_NO_MORE_RIDS
	StatusRecord::new(0xC000_03A1, 8210, 0, "The requested operation could not be performed because the directory service is not the master for that type of operation."), // STATUS_DS_INCORRECT_ROLE_OWNER
	StatusRecord::new(0xC000_03A2, 8211, 0, "The directory service was unable to initialize the subsystem that allocates relative identifiers."), // STATUS_DS_RIDMGR_INIT_ERROR
	StatusRecord::new(0xC000_03A3, 8212, 0, "The requested operation did not satisfy one or more constraints that are associated with the class of the object."), // STATUS_DS_OBJ_CLASS_VIOLATION
	StatusRecord::new(0xC000_03A4, 8213, 0, "The directory service can perform the requested operation only on a leaf object."), // STATUS_DS_CANT_ON_NON_LEAF
	StatusRecord::new(0xC000_03A5, 8214, 0, "The directory service cannot perform the requested operation on the Relatively Defined Name (RDN) attribute of an object."), // STATUS_DS_CANT_ON_RDN
	StatusRecord::new(0xC000_03A6, 8215, 0, "The directory service detected an attempt to modify the object class of an object."), // STATUS_DS_CANT_MOD_OBJ_CLASS
	StatusRecord::new(0xC000_03A7, 8216, 0, "An error occurred while performing a cross domain move operation."), // STATUS_DS_CROSS_DOM_MOVE_FAILED
	StatusRecord::new(0xC000_03A8, 8217, 0, "Unable to contact the global catalog server."), // STATUS_DS_GC_NOT_AVAILABLE
	StatusRecord::new(0xC000_03A9, 1296, 0, "The requested operation requires a directory service, and none was available."), // STATUS_DIRECTORY_SERVICE_REQUIRED
	StatusRecord::new(0xC000_03AA, 4391, 0, "The reparse attribute cannot be set because it is incompatible with an existing attribute."), // STATUS_REPARSE_ATTRIBUTE_CONFLICT
	StatusRecord::new(0xC000_03AB, 629, 0, "A group marked \"use for deny only\" cannot be enabled."), // STATUS_CANT_ENABLE_DENY_ONLY
	StatusRecord::new(0xC000_03AC, 0xC000_03AC, 0, "{EXCEPTION}\nMultiple floating-point faults."), // STATUS_FLOAT_MULTIPLE_FAULTS
	StatusRecord::new(0xC000_03AD, 0xC000_03AD, 0, "{EXCEPTION}\nMultiple floating-point traps."), // STATUS_FLOAT_MULTIPLE_TRAPS
	StatusRecord::new(0xC000_03AF, 1178, 0, "The volume change journal is being deleted."), // STATUS_JOURNAL_DELETE_IN_PROGRESS
	StatusRecord::new(0xC000_03B0, 1179, 0, "The volume change journal is not active."), // STATUS_JOURNAL_NOT_ACTIVE
	StatusRecord::new(0xC000_03B1, 632, 0, "The requested interface is not supported."), // STATUS_NOINTERFACE
	StatusRecord::new(0xC000_03B2, 8263, 0, "The directory service detected the subsystem that allocates relative identifiers is disabled."), // STATUS_DS_RIDMGR_DISABLED
	StatusRecord::new(0xC000_03B3, 8228, 0, "A directory service resource limit has been exceeded."), // STATUS_DS_ADMIN_LIMIT_EXCEEDED
	StatusRecord::new(0xC000_03B4, 633, 0, "{System Standby Failed}\nThe driver %hs does not support standby mode. Updating this driver may allow the system to go to standby mode."), // STATUS_DRIVER_FAILED_SLEEP
	StatusRecord::new(0xC000_03B5, 1397, 0, "Mutual Authentication failed. The server password is out of date at the domain controller."), // STATUS_MUTUAL_AUTHENTICATION_FAILED
	StatusRecord::new(0xC000_03B6, 634, 0, "The system file %1 has become corrupt and has been replaced."), // STATUS_CORRUPT_SYSTEM_FILE
	StatusRecord::new(0xC000_03BB, 1, 22, "{EXCEPTION}\nRegister NaT consumption faults.\nA NaT value is consumed on a non-speculative instruction."), // STATUS_REG_NAT_CONSUMPTION
	StatusRecord::new(0xC000_03BD, 8541, 0, "Security Accounts Manager initialization failed because of the following error: %hs Error Status: 0x%x. Click OK to shut down this system and restart in Directory Services Restore Mode. Check the event log for more detailed information."), // STATUS_DS_SAM_INIT_FAILURE
	StatusRecord::new(0xC000_03BE, 1251, 0, "This operation is supported only when you are connected to the server."), // STATUS_ONLY_IF_CONNECTED
	StatusRecord::new(0xC000_03BF, 8547, 0, "Only an administrator can modify the membership list of an administrative group."), // STATUS_DS_SENSITIVE_GROUP_VIOLATION
	StatusRecord::new(0xC000_03C1, 1181, 0, "The journal entry has been deleted from the journal."), // STATUS_JOURNAL_ENTRY_DELETED
	StatusRecord::new(0xC000_03C2, 8548, 0, "Cannot change the primary group ID of a domain controller account."), // STATUS_DS_CANT_MOD_PRIMARYGROUPID
	StatusRecord::new(0xC000_03C3, 637, 0, "{Fatal System Error}\nThe system image %s is not properly signed. The file has been replaced with the signed file. The system has been shut down."), // STATUS_SYSTEM_IMAGE_BAD_SIGNATURE
	StatusRecord::new(0xC000_03C5, 639, 0, "The power state of the current device cannot support this request."), // STATUS_POWER_STATE_INVALID
	StatusRecord::new(0xC000_03C6, 8513, 0, "The specified group type is invalid."), // STATUS_DS_INVALID_GROUP_TYPE
	StatusRecord::new(0xC000_03C7, 8514, 0, "In a mixed domain, no nesting of a global group if the group is security enabled."), // STATUS_DS_NO_NEST_GLOBALGROUP_IN_MIXEDDOMAIN
	StatusRecord::new(0xC000_03C8, 8515, 0, "In a mixed domain, cannot nest local groups with other local groups, if the group is security enabled."), // STATUS_DS_NO_NEST_LOCALGROUP_IN_MIXEDDOMAIN
	StatusRecord::new(0xC000_03C9, 8516, 0, "A global group cannot have a local group as a member."), // STATUS_DS_GLOBAL_CANT_HAVE_LOCAL_MEMBER
	StatusRecord::new(0xC000_03CA, 8517, 0, "A global group cannot have a universal group as a member."), // STATUS_DS_GLOBAL_CANT_HAVE_UNIVERSAL_MEMBER
	StatusRecord::new(0xC000_03CB, 8518, 0, "A universal group cannot have a local group as a member."), // STATUS_DS_UNIVERSAL_CANT_HAVE_LOCAL_MEMBER
	StatusRecord::new(0xC000_03CC, 8519, 0, "A global group cannot have a cross-domain member."), // STATUS_DS_GLOBAL_CANT_HAVE_CROSSDOMAIN_MEMBER
	StatusRecord::new(0xC000_03CD, 8520, 0, "A local group cannot have another cross-domain local group as a member."), // STATUS_DS_LOCAL_CANT_HAVE_CROSSDOMAIN_LOCAL_MEMBER
	StatusRecord::new(0xC000_03CE, 8521, 0, "Cannot change to a security-disabled group because primary members are in this group."), // STATUS_DS_HAVE_PRIMARY_MEMBERS
	StatusRecord::new(0xC000_03CF, 50, 129, "The WMI operation is not supported by the data block or method."), // STATUS_WMI_NOT_SUPPORTED
	StatusRecord::new(0xC000_03D0, 639, 0, "There is not enough power to complete the requested operation."), // STATUS_INSUFFICIENT_POWER
	StatusRecord::new(0xC000_03D1, 8529, 0, "The Security Accounts Manager needs to get the boot password."), // STATUS_SAM_NEED_BOOTKEY_PASSWORD
	StatusRecord::new(0xC000_03D2, 8530, 0, "The Security Accounts Manager needs to get the boot key from the floppy disk."), // STATUS_SAM_NEED_BOOTKEY_FLOPPY
	StatusRecord::new(0xC000_03D3, 8531, 0, "The directory service cannot start."), // STATUS_DS_CANT_START
	StatusRecord::new(0xC000_03D4, 8532, 0, "The directory service could not start because of the following error: %hs Error Status: 0x%x. Click OK to shut down this system and restart in Directory Services Restore Mode. Check the event log for more detailed information."), // STATUS_DS_INIT_FAILURE
	StatusRecord::new(0xC000_03D5, 8541, 0, "The Security Accounts Manager initialization failed because of the following error: %hs Error Status: 0x%x. Click OK to shut down this system and restart in Safe Mode. Check the event log for more detailed information."), // STATUS_SAM_INIT_FAILURE
	StatusRecord::new(0xC000_03D6, 8547, 0, "The requested operation can be performed only on a global catalog server."), // STATUS_DS_GC_REQUIRED
	StatusRecord::new(0xC000_03D7, 8548, 0, "A local group can only be a member of other local groups in the same domain."), // STATUS_DS_LOCAL_MEMBER_OF_LOCAL_ONLY
	StatusRecord::new(0xC000_03D8, 8549, 0, "Foreign security principals cannot be members of universal groups."), // STATUS_DS_NO_FPO_IN_UNIVERSAL_GROUPS
	StatusRecord::new(0xC000_03D9, 8557, 0, "Your computer could not be joined to the domain. You have exceeded the maximum number of computer accounts you are allowed to create in this domain. Contact your system administrator to have this limit reset or increased."), // STATUS_DS_MACHINE_ACCOUNT_QUOTA_EXCEEDED
	StatusRecord::new(0xC000_03DA, 640, 0, "Multiple fault violations occurred while handling a single exception."), // STATUS_MULTIPLE_FAULT_VIOLATION
	StatusRecord::new(0xC000_03DB, 1399, 0, "This operation cannot be performed on the current domain."), // STATUS_CURRENT_DOMAIN_NOT_ALLOWED
	StatusRecord::new(0xC000_03DD, 641, 0, "The system is in the process of shutting down."), // STATUS_SYSTEM_SHUTDOWN
	StatusRecord::new(0xC000_03DE, 8561, 0, "Directory Services could not start because of the following error: %hs Error Status: 0x%x. Click OK to shut down the system. You can use the recovery console to diagnose the system further."), // STATUS_DS_INIT_FAILURE_CONSOLE
	StatusRecord::new(0xC000_03DF, 8562, 0, "Security Accounts Manager initialization failed because of the following error: %hs Error Status: 0x%x. Click OK to shut down the system. You can use the recovery console to diagnose the system further."), // STATUS_DS_SAM_INIT_FAILURE_CONSOLE
	StatusRecord::new(0xC000_03E0, 1312, 0, "A security context was deleted before the context was completed. It is considered a logon failure."), // STATUS_UNFINISHED_CONTEXT_DELETED
	StatusRecord::new(0xC000_03E1, 1787, 0, "The client is trying to negotiate a context and the server requires user-to-user but did not send a TGT reply."), // STATUS_NO_TGT_REPLY
	StatusRecord::new(0xC000_03E2, 4312, 0, "An object ID was not found in the file."), // STATUS_OBJECTID_NOT_FOUND
	StatusRecord::new(0xC000_03E3, 1393, 5, "Unable to accomplish the requested task because the local machine does not have any IP addresses."), // STATUS_NO_IP_ADDRESSES
	StatusRecord::new(0xC000_03E4, 1327, 0, "The supplied credential handle does not match the credential that is associated with the security context."), // STATUS_WRONG_CREDENTIAL_HANDLE
	StatusRecord::new(0xC000_03E5, 1790, 0, "The crypto system or checksum function is invalid because a required function is unavailable."), // STATUS_CRYPTO_SYSTEM_INVALID
	StatusRecord::new(0xC000_03E6, 1791, 0, "The number of maximum ticket referrals has been exceeded."), // STATUS_MAX_REFERRALS_EXCEEDED
	StatusRecord::new(0xC000_03E7, 1792, 0, "The local machine must be a Kerberos KDC (domain controller) and it is not."), // STATUS_MUST_BE_KDC
	StatusRecord::new(0xC000_03E8, 1793, 0, "The other end of the security negotiation requires strong crypto but it is not supported on the local machine."), // STATUS_STRONG_CRYPTO_NOT_SUPPORTED
	StatusRecord::new(0xC000_03E9, 1794, 0, "The KDC reply contained more than one principal name."), // STATUS_TOO_MANY_PRINCIPALS
	StatusRecord::new(0xC000_03EA, 1795, 0, "Expected to find PA data for a hint of what etype to use, but it was not found."), // STATUS_NO_PA_DATA
	StatusRecord::new(0xC000_03EB, 1796, 0, "The client certificate does not contain a valid UPN, or does not match the client name in the logon request. Contact your administrator."), // STATUS_PKINIT_NAME_MISMATCH
	StatusRecord::new(0xC000_03ED, 1798, 0, "An invalid request was sent to the KDC."), // STATUS_KDC_INVALID_REQUEST
	StatusRecord::new(0xC000_03EE, 1799, 0, "The KDC was unable to generate a referral for the service requested."), // STATUS_KDC_UNABLE_TO_REFER
	StatusRecord::new(0xC000_03EF, 1800, 0, "The encryption type requested is not supported by the KDC."), // STATUS_KDC_UNKNOWN_ETYPE
	StatusRecord::new(0xC000_03F0, 1115, 0, "A system shutdown is in progress."), // STATUS_SHUTDOWN_IN_PROGRESS
	StatusRecord::new(0xC000_03F1, 1255, 0, "The server machine is shutting down."), // STATUS_SERVER_SHUTDOWN_IN_PROGRESS
	StatusRecord::new(0xC000_03FA, 1265, 0, "The domain controller certificate used for smart card logon has expired."), // STATUS_KDC_CERT_EXPIRED
	StatusRecord::new(0xC000_03FB, 1265, 0, "The domain controller certificate used for smart card logon has been revoked."), // STATUS_KDC_CERT_REVOKED
	StatusRecord::new(0xC000_03FC, 1265, 0, "The domain controller certificate used for smart card logon is not valid for this purpose."), // STATUS_KDC_INVALID_CERT_USAGE
	StatusRecord::new(0xC000_03FD, 1265, 0, "The client name in the smart card certificate does not match the client name in the request."), // STATUS_PKINIT_CLIENT_NAME_MISMATCH
	StatusRecord::new(0xC000_03FE, 1265, 0, "The name in the KDC certificate does not match the target domain name."), // STATUS_KDC_NAME_MISMATCH
	StatusRecord::new(0xC000_03FF, 1265, 0, "The domain controller certificate chain could not be built to a trusted root certificate authority."), // STATUS_KDC_CERT_UNTRUSTED
	StatusRecord::new(0xC000_0401, 1932, 0, "The quota of trusts that can be created by this user has been exceeded."), // STATUS_PER_USER_TRUST_QUOTA_EXCEEDED
	StatusRecord::new(0xC000_0402, 1933, 0, "The total quota of trusts that can be created in this domain has been exceeded."), // STATUS_ALL_USER_TRUST_QUOTA_EXCEEDED
	StatusRecord::new(0xC000_0403, 1934, 0, "The quota of trusts that can be deleted by this user has been exceeded."), // STATUS_USER_DELETE_TRUST_QUOTA_EXCEEDED
	StatusRecord::new(0xC000_0404, 8571, 0, "The requested name already exists as a unique identifier."), // STATUS_DS_NAME_NOT_UNIQUE
	StatusRecord::new(0xC000_0405, 8605, 0, "The requested object has a non-unique identifier and cannot be retrieved."), // STATUS_DS_DUPLICATE_ID_FOUND
	StatusRecord::new(0xC000_0406, 8607, 0, "The group cannot be converted due to attribute restrictions on the requested group type."), // STATUS_DS_GROUP_CONVERSION_ERROR
	StatusRecord::new(0xC000_0407, 655, 0, "{Volume Shadow Copy Service}\nWait while the Volume Shadow Copy Service prepares volume %hs for hibernation."), // STATUS_VOLSNAP_PREPARE_HIBERNATE
	StatusRecord::new(0xC000_0408, 1787, 0, "Kerberos sub-protocol User2User is required."), // STATUS_USER2USER_REQUIRED
	StatusRecord::new(0xC000_0409, 0xC000_0409, 0, "The system detected an overrun of a stack-based buffer in this application. This overrun could potentially allow a malicious user to gain control of this application."), // STATUS_STACK_BUFFER_OVERRUN
	StatusRecord::new(0xC000_040A, 1283, 0, "Data present in one of the parameters is more than the function can operate on."), // STATUS_PARAMETER_QUOTA_EXCEEDED
	StatusRecord::new(0xC000_040B, 1465, 0, "The system was unable to parse the requested XML data."), // STATUS_XML_PARSE_ERROR
	StatusRecord::new(0xC000_040C, 1466, 0, "An error was encountered while processing an XML digital signature."), // STATUS_XMLDSIG_ERROR
	StatusRecord::new(0xC000_040D, 1468, 0, "The current thread is not in the specified compartment."), // STATUS_WRONG_COMPARTMENT
	StatusRecord::new(0xC000_040E, 1469, 0, "An AuthIP failure occurred."), // STATUS_AUTHIP_FAILURE
	StatusRecord::new(0xC000_040F, 8634, 0, "The group cannot have members because it is mapped to an object identifier."), // STATUS_DS_OID_MAPPED_GROUP_CANT_HAVE_MEMBERS
	StatusRecord::new(0xC000_0410, 8635, 0, "The specified object identifier was not found."), // STATUS_DS_OID_NOT_FOUND
	StatusRecord::new(0xC000_0411, 8646, 0, "The account type is not valid for the requested operation."), // STATUS_INCORRECT_ACCOUNT_TYPE
	StatusRecord::new(0xC000_0412, 1470, 0, "The hash requested is not supported."), // STATUS_HASH_NOT_SUPPORTED
	StatusRecord::new(0xC000_0413, 1935, 0, "The computer you are signing into is protected by an authentication firewall. The specified account is not allowed to authenticate to the computer."), // STATUS_AUTHENTICATION_FIREWALL_FAILED
	StatusRecord::new(0xC000_0414, 1286, 0, "The NTVDM subsystem is disabled on this computer."), // STATUS_VDM_DISALLOWED
	StatusRecord::new(0xC000_0415, 1297, 0, "{Display Driver Stopped Responding}\nThe %hs display driver has stopped working normally. Save your work and reboot the system to restore full display functionality."), // STATUS_HUNG_DISPLAY_DRIVER_THREAD
	StatusRecord::new(0xC000_0416, 1299, 0, "The desktop heap encountered an error while allocating session memory. There is more information in the system event log."), // STATUS_INSUFFICIENT_RESOURCE_FOR_SPECIFIED_SHARED_SECTION_SIZE
	StatusRecord::new(0xC000_0417, 0xC000_0417, 0, "An invalid parameter was passed to a C runtime function."), // STATUS_INVALID_CRUNTIME_PARAMETER
	StatusRecord::new(0xC000_0418, 1937, 0, "The authentication failed because NTLM was blocked."), // STATUS_NTLM_BLOCKED
	StatusRecord::new(0xC000_0419, 8630, 0, "The source object must be a group or user."), // STATUS_DS_SRC_SID_EXISTS_IN_FOREST
	StatusRecord::new(0xC000_041A, 8631, 0, "The specified domain name already exists in the forest."), // STATUS_DS_DOMAIN_NAME_EXISTS_IN_FOREST
	StatusRecord::new(0xC000_041B, 8632, 0, "The specified flat name already exists in the forest."), // STATUS_DS_FLAT_NAME_EXISTS_IN_FOREST
	StatusRecord::new(0xC000_041C, 8636, 0, "The specified user principal name is not valid."), // STATUS_INVALID_USER_PRINCIPAL_NAME
	StatusRecord::new(0xC000_041D, 0xC000_041D, 0, "An unhandled exception was encountered during a user callback."), // STATUS_FATAL_USER_CALLBACK_EXCEPTION
	StatusRecord::new(0xC000_041E, 1273, 0, "A callback was bypassed during an unwind."), // STATUS_CALLBACK_BYPASS
	StatusRecord::new(0xC000_041F, 1279, 0, "The directory service has run out of session handles."), // STATUS_DS_NO_MORE_SESSIONS
	StatusRecord::new(0xC000_0420, 668, 0, "An assertion failure has occurred."), // STATUS_ASSERTION_FAILURE
	StatusRecord::new(0xC000_0421, 537, 0, "Application verifier has found an error in the current process."), // STATUS_VERIFIER_STOP
	StatusRecord::new(0xC000_0423, 768, 0, "A user mode unwind is in progress."), // STATUS_CALLBACK_POP_STACK
	StatusRecord::new(0xC000_0424, 1275, 0, "%2 has been blocked from loading due to incompatibility with this system. Please contact your software vendor for a compatible version of the driver."), // STATUS_INCOMPATIBLE_DRIVER_BLOCKED
	StatusRecord::new(0xC000_0425, 1016, 0, "The registry hive being accessed has been unloaded."), // STATUS_HIVE_UNLOADED
	StatusRecord::new(0xC000_0426, 769, 0, "Compression is disabled for this volume."), // STATUS_COMPRESSION_DISABLED
	StatusRecord::new(0xC000_0427, 665, 0, "The requested operation could not be completed due to a file system limitation"), // STATUS_FILE_SYSTEM_LIMITATION
	StatusRecord::new(0xC000_0428, 577, 0, "Windows cannot verify the digital signature for this file. A recent hardware or software change might have installed a file that is signed incorrectly or damaged, or that might be malicious software from an unknown source."), // STATUS_INVALID_IMAGE_HASH
	StatusRecord::new(0xC000_0429, 775, 0, "The implementation is not capable of performing the request."), // STATUS_NOT_CAPABLE
	StatusRecord::new(0xC000_042A, 776, 0, "The requested operation is out of order with respect to other operations."), // STATUS_REQUEST_OUT_OF_SEQUENCE
	StatusRecord::new(0xC000_042B, 1292, 0, "An operation attempted to exceed an implementation-defined limit."), // STATUS_IMPLEMENTATION_LIMIT
	StatusRecord::new(0xC000_042C, 740, 13, "The requested operation requires elevation."), // STATUS_ELEVATION_REQUIRED
	StatusRecord::new(0xC000_042D, 802, 0, "An oplock could not be broken because another operation is in progress."), // STATUS_CANNOT_BREAK_OPLOCK
	StatusRecord::new(0xC000_042E, 1287, 0, "The operation is beyond the valid data length of the file."), // STATUS_BEYOND_VDL
	StatusRecord::new(0xC000_042F, 1288, 0, "A write operation is already in progress on the target."), // STATUS_ENCOUNTERED_WRITE_IN_PROGRESS
	StatusRecord::new(0xC000_0430, 1289, 0, "The page table entry changed during the operation."), // STATUS_PTE_CHANGED
	StatusRecord::new(0xC000_0431, 762, 0, "The purge of the cached data failed."), // STATUS_PURGE_FAILED
	StatusRecord::new(0xC000_0432, 1290, 0, "The credentials require confirmation before use."), // STATUS_CRED_REQUIRES_CONFIRMATION
	StatusRecord::new(0xC000_0433, 6023, 0, "The remote server sent an invalid response for a file being opened with client-side encryption."), // STATUS_CS_ENCRYPTION_INVALID_SERVER_RESPONSE
	StatusRecord::new(0xC000_0434, 6024, 0, "Client-side encryption is not supported by the remote server even though it claims to support it."), // STATUS_CS_ENCRYPTION_UNSUPPORTED_SERVER
	StatusRecord::new(0xC000_0435, 6025, 0, "File is encrypted and should be opened in client-side encryption mode."), // STATUS_CS_ENCRYPTION_EXISTING_ENCRYPTED_FILE
	StatusRecord::new(0xC000_0436, 6026, 0, "A new encrypted file is being created and a $EFS needs to be provided."), // STATUS_CS_ENCRYPTION_NEW_ENCRYPTED_FILE
	StatusRecord::new(0xC000_0437, 6027, 0, "The SMB client requested a CSE FSCTL on a non-CSE file."), // STATUS_CS_ENCRYPTION_FILE_NOT_CSE
	StatusRecord::new(0xC000_0438, 1299, 0, "Indicates a particular Security ID may not be assigned as the label of an object."), // STATUS_INVALID_LABEL
	StatusRecord::new(0xC000_0440, 1291, 0, "The process hosting the driver for this device has terminated."), // STATUS_DRIVER_PROCESS_TERMINATED
	StatusRecord::new(0xC000_0441, 15250, 0, "The requested system device cannot be identified due to multiple indistinguishable devices potentially matching the identification criteria."), // STATUS_AMBIGUOUS_SYSTEM_DEVICE
	StatusRecord::new(0xC000_0442, 15299, 0, "The requested system device cannot be found."), // STATUS_SYSTEM_DEVICE_NOT_FOUND
	StatusRecord::new(0xC000_0443, 1292, 0, "This boot application must be restarted."), // STATUS_RESTART_BOOT_APPLICATION
	StatusRecord::new(0xC000_0444, 1470, 0, "Insufficient NVRAM resources exist to complete the API. A reboot might be required."), // STATUS_INSUFFICIENT_NVRAM_RESOURCES
	StatusRecord::new(0xC000_0445, 1293, 0, "The specified session is invalid."), // STATUS_INVALID_SESSION
	StatusRecord::new(0xC000_0446, 1294, 0, "The specified thread is already in a session."), // STATUS_THREAD_ALREADY_IN_SESSION
	StatusRecord::new(0xC000_0447, 1295, 0, "The specified thread is not in a session."), // STATUS_THREAD_NOT_IN_SESSION
	StatusRecord::new(0xC000_0448, 1296, 0, "The specified weight is invalid."), // STATUS_INVALID_WEIGHT
	StatusRecord::new(0xC000_0449, 3050, 0, "The operation was paused."), // STATUS_REQUEST_PAUSED
	StatusRecord::new(0xC000_0460, 312, 0, "No ranges for the specified operation were able to be processed."), // STATUS_NO_RANGES_PROCESSED
	StatusRecord::new(0xC000_0461, 314, 0, "The physical resources of this disk have been exhausted."), // STATUS_DISK_RESOURCES_EXHAUSTED
	StatusRecord::new(0xC000_0462, 15612, 0, "The application cannot be started. Try reinstalling the application to fix the problem."), // STATUS_NEEDS_REMEDIATION
	StatusRecord::new(0xC000_0463, 316, 0, "The device does not support the command feature."), // STATUS_DEVICE_FEATURE_NOT_SUPPORTED
	StatusRecord::new(0xC000_0464, 321, 0, "The device is unreachable."), // STATUS_DEVICE_UNREACHABLE
	StatusRecord::new(0xC000_0465, 315, 0, "The token representing the data is invalid or has expired."), // STATUS_INVALID_TOKEN
	StatusRecord::new(0xC000_0466, 1722, 0, "The file server is temporarily unavailable."), // STATUS_SERVER_UNAVAILABLE
	StatusRecord::new(0xC000_0467, 4350, 0, "The file is temporarily unavailable."), // STATUS_FILE_NOT_AVAILABLE
	StatusRecord::new(0xC000_0468, 322, 0, "The device is insufficient resources to complete the request."), // STATUS_DEVICE_INSUFFICIENT_RESOURCES
	StatusRecord::new(0xC000_0469, 15618, 0, "The application cannot be started because it is currently updating."), // STATUS_PACKAGE_UPDATING
	StatusRecord::new(0xC000_046A, 337, 0, "The specified copy of the requested data could not be read."), // STATUS_NOT_READ_FROM_COPY
	StatusRecord::new(0xC000_046B, 338, 0, "The specified data could not be written to any of the copies."), // STATUS_FT_WRITE_FAILURE
	StatusRecord::new(0xC000_046C, 339, 0, "One or more copies of data on this device may be out of sync. No writes may be performed until a data integrity scan is completed."), // STATUS_FT_DI_SCAN_REQUIRED
	StatusRecord::new(0xC000_046D, 342, 0, "The object is not externally backed."), // STATUS_OBJECT_NOT_EXTERNALLY_BACKED
	StatusRecord::new(0xC000_046E, 343, 0, "The external backing provider is not recognized."), // STATUS_EXTERNAL_BACKING_PROVIDER_UNKNOWN
	StatusRecord::new(0xC000_046F, 344, 0, "Compressing this object would not save space."), // STATUS_COMPRESSION_NOT_BENEFICIAL
	StatusRecord::new(0xC000_0470, 323, 0, "A data integrity checksum error occurred. Data in the file stream is corrupt."), // STATUS_DATA_CHECKSUM_ERROR
	StatusRecord::new(0xC000_0471, 324, 0, "An attempt was made to modify both a KERNEL and normal Extended Attribute (EA) in the same operation."), // STATUS_INTERMIXED_KERNEL_EA_OPERATION
	StatusRecord::new(0xC000_0472, 326, 0, "The device does not support file-level TRIM."), // STATUS_TRIM_READ_ZERO_NOT_SUPPORTED
	StatusRecord::new(0xC000_0473, 331, 0, "The command specified a number of descriptors that exceeded the maximum supported by the device."), // STATUS_TOO_MANY_SEGMENT_DESCRIPTORS
	StatusRecord::new(0xC000_0474, 327, 0, "The command specified a data offset that does not align to the device's granularity/alignment."), // STATUS_INVALID_OFFSET_ALIGNMENT
	StatusRecord::new(0xC000_0475, 328, 0, "The command specified an invalid field in its parameter list."), // STATUS_INVALID_FIELD_IN_PARAMETER_LIST
	StatusRecord::new(0xC000_0476, 329, 0, "An operation is currently in progress with the device."), // STATUS_OPERATION_IN_PROGRESS
	StatusRecord::new(0xC000_0477, 330, 0, "An attempt was made to send down the command via an invalid path to the target device."), // STATUS_INVALID_INITIATOR_TARGET_PATH
	StatusRecord::new(0xC000_0478, 332, 0, "Scrub is disabled on the specified file."), // STATUS_SCRUB_DATA_DISABLED
	StatusRecord::new(0xC000_0479, 333, 0, "The storage device does not provide redundancy."), // STATUS_NOT_REDUNDANT_STORAGE
	StatusRecord::new(0xC000_047A, 334, 0, "An operation is not supported on a resident file."), // STATUS_RESIDENT_FILE_NOT_SUPPORTED
	StatusRecord::new(0xC000_047B, 335, 0, "An operation is not supported on a compressed file."), // STATUS_COMPRESSED_FILE_NOT_SUPPORTED
	StatusRecord::new(0xC000_047C, 336, 0, "An operation is not supported on a directory."), // STATUS_DIRECTORY_NOT_SUPPORTED
	StatusRecord::new(0xC000_047D, 1460, 138, "The specified I/O operation failed to complete within the expected time period."), // STATUS_IO_OPERATION_TIMEOUT
	StatusRecord::new(0xC000_047E, 15623, 0, "An error in a system binary was detected. Try refreshing the PC to fix the problem."), // STATUS_SYSTEM_NEEDS_REMEDIATION
	StatusRecord::new(0xC000_047F, 15624, 0, "A Corrupted CLR NGEN binary was detected on the system."), // STATUS_APPX_INTEGRITY_FAILURE_CLR_NGEN
	StatusRecord::new(0xC000_0480, 1249, 0, "The share is temporarily unavailable."), // STATUS_SHARE_UNAVAILABLE
	StatusRecord::new(0xC000_0481, 14001, 0, "The target dll was not found."), // STATUS_APISET_NOT_HOSTED
	StatusRecord::new(0xC000_0482, 14001, 0, "The API set extension contains a host for a non-existent API set."), // STATUS_APISET_NOT_PRESENT
	StatusRecord::new(0xC000_0483, 483, 0, "The request failed due to a fatal device hardware error."), // STATUS_DEVICE_HARDWARE_ERROR
	StatusRecord::new(0xC000_0484, 1, 22, "The specified firmware slot is invalid."), // STATUS_FIRMWARE_SLOT_INVALID
	StatusRecord::new(0xC000_0485, 1, 22, "The specified firmware image is invalid."), // STATUS_FIRMWARE_IMAGE_INVALID
	StatusRecord::new(0xC000_0486, 345, 0, "The request failed due to a storage topology ID mismatch."), // STATUS_STORAGE_TOPOLOGY_ID_MISMATCH
	StatusRecord::new(0xC000_0487, 4448, 0, "The specified Windows Image (WIM) is not marked as bootable."), // STATUS_WIM_NOT_BOOTABLE
	StatusRecord::new(0xC000_0488, 346, 0, "The operation was blocked by parental controls."), // STATUS_BLOCKED_BY_PARENTAL_CONTROLS
	StatusRecord::new(0xC000_0489, 15631, 0, "The deployment operation failed because the specified application needs to be registered first."), // STATUS_NEEDS_REGISTRATION
	StatusRecord::new(0xC000_048A, 1851, 0, "The requested operation failed due to quota operation is still in progress."), // STATUS_QUOTA_ACTIVITY
	StatusRecord::new(0xC000_048B, 317, 0, "The callback function must be invoked inline."), // STATUS_CALLBACK_INVOKE_INLINE
	StatusRecord::new(0xC000_048C, 347, 0, "A file system block being referenced has already reached the maximum reference count and can't be referenced any further."), // STATUS_BLOCK_TOO_MANY_REFERENCES
	StatusRecord::new(0xC000_048D, 348, 0, "The requested operation failed because the file stream is marked to disallow writes."), // STATUS_MARKED_TO_DISALLOW_WRITES
	StatusRecord::new(0xC000_048E, 354, 0, "Windows Information Protection policy does not allow access to this network resource."), // STATUS_NETWORK_ACCESS_DENIED_EDP
	StatusRecord::new(0xC000_048F, 349, 0, "The requested operation failed with an architecture-specific failure code."), // STATUS_ENCLAVE_FAILURE
	StatusRecord::new(0xC000_0490, 1, 22, "There are no compatible drivers available for this device."), // STATUS_PNP_NO_COMPAT_DRIVERS
	StatusRecord::new(0xC000_0491, 2, 2, "The specified driver package cannot be found on the system."), // STATUS_PNP_DRIVER_PACKAGE_NOT_FOUND
	StatusRecord::new(0xC000_0492, 2, 2, "The driver package cannot find a required driver configuration."), // STATUS_PNP_DRIVER_CONFIGURATION_NOT_FOUND
	StatusRecord::new(0xC000_0493, 1, 22, "The driver configuration is incomplete for use with this device."), // STATUS_PNP_DRIVER_CONFIGURATION_INCOMPLETE
	StatusRecord::new(0xC000_0494, 1, 22, "The device requires a driver configuration with a function driver."), // STATUS_PNP_FUNCTION_DRIVER_REQUIRED
	StatusRecord::new(0xC000_0495, 1, 22, "The device is pending further configuration."), // STATUS_PNP_DEVICE_CONFIGURATION_PENDING
	StatusRecord::new(0xC000_0496, 355, 0, "The device hint name buffer is too small to receive the remaining name."), // STATUS_DEVICE_HINT_NAME_BUFFER_TOO_SMALL
	StatusRecord::new(0xC000_0497, 1, 22, "The package is currently not available."), // STATUS_PACKAGE_NOT_AVAILABLE
	StatusRecord::new(0xC000_0499, 359, 0, "The device is in maintenance mode."), // STATUS_DEVICE_IN_MAINTENANCE
	StatusRecord::new(0xC000_049A, 360, 0, "This operation is not supported on a DAX volume."), // STATUS_NOT_SUPPORTED_ON_DAX
	StatusRecord::new(0xC000_049B, 303, 0, "The free space on the volume is too fragmented to complete this operation."), // STATUS_FREE_SPACE_TOO_FRAGMENTED
	StatusRecord::new(0xC000_049C, 361, 0, "The volume has active DAX mappings."), // STATUS_DAX_MAPPING_EXISTS
	StatusRecord::new(0xC000_049D, 367, 0, "The process creation has been blocked."), // STATUS_CHILD_PROCESS_BLOCKED
	StatusRecord::new(0xC000_049E, 368, 0, "The storage device has lost data or persistence."), // STATUS_STORAGE_LOST_DATA_PERSISTENCE
	StatusRecord::new(0xC000_049F, 1183, 0, "Driver Verifier Volatile settings cannot be set when CFG and IO are enabled."), // STATUS_VRF_CFG_AND_IO_ENABLED
	StatusRecord::new(0xC000_04A0, 1184, 0, "An attempt was made to access a partition that has begun termination."), // STATUS_PARTITION_TERMINATING
	StatusRecord::new(0xC000_04A1, 1185, 0, "An externally encrypted syscall is not supported on this system."), // STATUS_EXTERNAL_SYSCALL_NOT_SUPPORTED
	StatusRecord::new(0xC000_04A2, 1186, 0, "The request was denied by the enclave."), // STATUS_ENCLAVE_VIOLATION
	StatusRecord::new(0xC000_04A3, 1187, 0, "The operation was blocked because the file is protected under data protection."), // STATUS_FILE_PROTECTED_UNDER_DPL
	StatusRecord::new(0xC000_04A4, 1188, 0, "The volume is not cluster aligned on the disk."), // STATUS_VOLUME_NOT_CLUSTER_ALIGNED
	StatusRecord::new(0xC000_04A5, 1189, 0, "No physically aligned free space was found on the volume."), // STATUS_NO_PHYSICALLY_ALIGNED_FREE_SPACE_FOUND
	StatusRecord::new(0xC000_04A6, 409, 0, "The APPX file can not be accessed because it is not encrypted as expected."), // STATUS_APPX_FILE_NOT_ENCRYPTED
	StatusRecord::new(0xC000_04A7, 410, 0, "A read or write of raw encrypted data was attempted on a file that is not encrypted."), // STATUS_RWRAW_ENCRYPTED_FILE_NOT_ENCRYPTED
	StatusRecord::new(0xC000_04A8, 411, 0, "An invalid file offset in the encrypted data info block was passed for a read or write of raw encrypted data."), // STATUS_RWRAW_ENCRYPTED_INVALID_EDATAINFO_FILEOFFSET
	StatusRecord::new(0xC000_04A9, 412, 0, "An invalid offset and length combination in the encrypted data info was passed for a read or write of raw encrypted data."), // STATUS_RWRAW_ENCRYPTED_INVALID_EDATAINFO_FILERANGE
	StatusRecord::new(0xC000_04AA, 413, 0, "An invalid parameter in the encrypted data info was passed for a read or write of raw encrypted data."), // STATUS_RWRAW_ENCRYPTED_INVALID_EDATAINFO_PARAMETER
	StatusRecord::new(0xC000_04AB, 415, 0, "The specified data could not be read from any of the copies."), // STATUS_FT_READ_FAILURE
	StatusRecord::new(0xC000_04AC, 416, 0, "The patch could not be applied because it conflicts with an existing patch."), // STATUS_PATCH_CONFLICT
	StatusRecord::new(0xC000_04AD, 417, 0, "The specified storage reserve ID is invalid."), // STATUS_STORAGE_RESERVE_ID_INVALID
	StatusRecord::new(0xC000_04AE, 418, 0, "The specified storage reserve does not exist."), // STATUS_STORAGE_RESERVE_DOES_NOT_EXIST
	StatusRecord::new(0xC000_04AF, 419, 0, "The specified storage reserve already exists."), // STATUS_STORAGE_RESERVE_ALREADY_EXISTS
	StatusRecord::new(0xC000_04B0, 420, 0, "The specified storage reserve is not empty."), // STATUS_STORAGE_RESERVE_NOT_EMPTY
	StatusRecord::new(0xC000_04B1, 421, 0, "This operation requires a DAX volume."), // STATUS_NOT_A_DAX_VOLUME
	StatusRecord::new(0xC000_04B2, 422, 0, "This stream is not DAX mappable."), // STATUS_NOT_DAX_MAPPABLE
	StatusRecord::new(0xC000_04B3, 424, 0, "There are files in this directory whose names differ only in case."), // STATUS_CASE_DIFFERING_NAMES_IN_DIR
	StatusRecord::new(0xC000_04B4, 425, 0, "The file cannot be safely opened because it is not supported by this version of Windows."), // STATUS_FILE_NOT_SUPPORTED
	StatusRecord::new(0xC000_04B5, 429, 0, "The operation is not supported on a volume with a block translation table."), // STATUS_NOT_SUPPORTED_WITH_BTT
	StatusRecord::new(0xC000_04B6, 430, 0, "Encryption has been disabled for this volume."), // STATUS_ENCRYPTION_DISABLED
	StatusRecord::new(0xC000_04B7, 431, 0, "Encrypting metadata is not allowed."), // STATUS_ENCRYPTING_METADATA_DISALLOWED
	StatusRecord::new(0xC000_04B8, 432, 0, "Clearing the encryption flag is not allowed."), // STATUS_CANT_CLEAR_ENCRYPTION_FLAG
	StatusRecord::new(0xC000_0500, 1550, 0, "The specified task name is invalid."), // STATUS_INVALID_TASK_NAME
	StatusRecord::new(0xC000_0501, 1551, 0, "The specified task index is invalid."), // STATUS_INVALID_TASK_INDEX
	StatusRecord::new(0xC000_0502, 1552, 0, "The specified thread is already joining a task."), // STATUS_THREAD_ALREADY_IN_TASK
	StatusRecord::new(0xC000_0504, 319, 0, "A scope that has not been defined was specified."), // STATUS_UNDEFINED_SCOPE
	StatusRecord::new(0xC000_0505, 320, 0, "The specified CAP cannot be applied."), // STATUS_INVALID_CAP
	StatusRecord::new(0xC000_0506, 1471, 0, "The operation requires a GUI process."), // STATUS_NOT_GUI_PROCESS
	StatusRecord::new(0xC000_0507, 1460, 138, "The device has stopped responding."), // STATUS_DEVICE_HUNG
	StatusRecord::new(0xC000_0508, 1, 22, "The job is already assigned to a container."), // STATUS_CONTAINER_ASSIGNED
	StatusRecord::new(0xC000_0509, 1, 22, "The job is not assigned to a container."), // STATUS_JOB_NO_CONTAINER
	StatusRecord::new(0xC000_050A, 1460, 138, "The device is unresponsive."), // STATUS_DEVICE_UNRESPONSIVE
	StatusRecord::new(0xC000_050B, 4395, 0, "A reparse point was encountered."), // STATUS_REPARSE_POINT_ENCOUNTERED
	StatusRecord::new(0xC000_050C, 1, 22, "The requested attribute is not present on the specified file or directory."), // STATUS_ATTRIBUTE_NOT_PRESENT
	StatusRecord::new(0xC000_050D, 1, 22, "The volume is not a tiered volume."), // STATUS_NOT_A_TIERED_VOLUME
	StatusRecord::new(0xC000_050E, 4444, 0, "The file already has a stream ID."), // STATUS_ALREADY_HAS_STREAM_ID
	StatusRecord::new(0xC000_050F, 1, 22, "The job is not empty."), // STATUS_JOB_NOT_EMPTY
	StatusRecord::new(0xC000_0510, 1247, 0, "The object is already initialized."), // STATUS_ALREADY_INITIALIZED
	StatusRecord::new(0xC000_0511, 814, 0, "The enclave has not been terminated."), // STATUS_ENCLAVE_NOT_TERMINATED
	StatusRecord::new(0xC000_0512, 815, 0, "An attempt was made to access an enclave that is being terminated."), // STATUS_ENCLAVE_IS_TERMINATING
	StatusRecord::new(0xC000_0513, 384, 0, "SMB1 is unavailable."), // STATUS_SMB1_NOT_AVAILABLE
	StatusRecord::new(0xC000_0514, 816, 0, "The operation must be performed after SMR garbage collection."), // STATUS_SMR_GARBAGE_COLLECTION_REQUIRED
	StatusRecord::new(0xC000_0515, 95, 0, "The operation was interrupted."), // STATUS_INTERRUPTED
	StatusRecord::new(0xC000_0516, 1, 22, "The thread is not in a running state."), // STATUS_THREAD_NOT_RUNNING
	StatusRecord::new(0xC000_0602, 0xC000_0602, 0, "{Fail Fast Exception}\nA fail fast exception occurred. Exception handlers will not be invoked and the process will be terminated immediately."), // STATUS_FAIL_FAST_EXCEPTION
	StatusRecord::new(0xC000_0603, 577, 0, "Windows cannot verify the digital signature for this file. The signing certificate for this file has been revoked."), // STATUS_IMAGE_CERT_REVOKED
	StatusRecord::new(0xC000_0604, 1655, 0, "The operation was blocked as the process prohibits dynamic code generation."), // STATUS_DYNAMIC_CODE_BLOCKED
	StatusRecord::new(0xC000_0605, 577, 0, "Windows cannot verify the digital signature for this file. The signing certificate for this file has expired."), // STATUS_IMAGE_CERT_EXPIRED
	StatusRecord::new(0xC000_0606, 1657, 0, "The image file was blocked because it does not support strict control flow guard."), // STATUS_STRICT_CFG_VIOLATION
	StatusRecord::new(0xC000_060A, 1660, 0, "The thread context could not be updated because this has been restricted for the process."), // STATUS_SET_CONTEXT_DENIED
	StatusRecord::new(0xC000_060B, 1661, 0, "An invalid cross-partition private file or section access was attempted."), // STATUS_CROSS_PARTITION_VIOLATION
	StatusRecord::new(0xC000_0700, 1, 22, "The ALPC port is closed."), // STATUS_PORT_CLOSED
	StatusRecord::new(0xC000_0701, 1, 22, "The ALPC message requested is no longer available."), // STATUS_MESSAGE_LOST
	StatusRecord::new(0xC000_0702, 1, 22, "The ALPC message supplied is invalid."), // STATUS_INVALID_MESSAGE
	StatusRecord::new(0xC000_0703, 1223, 105, "The request was canceled."), // STATUS_REQUEST_CANCELED
	StatusRecord::new(0xC000_0704, 1, 22, "The ALPC port is already processing a message on the calling thread."), // STATUS_RECURSIVE_DISPATCH
	StatusRecord::new(0xC000_0705, 1, 22, "The ALPC port expects a receive buffer for this message."), // STATUS_LPC_RECEIVE_BUFFER_EXPECTED
	StatusRecord::new(0xC000_0706, 1, 22, "The ALPC connection port cannot be used for this operation."), // STATUS_LPC_INVALID_CONNECTION_USAGE
	StatusRecord::new(0xC000_0707, 1, 22, "The ALPC port does not accept new request messages."), // STATUS_LPC_REQUESTS_NOT_ALLOWED
	StatusRecord::new(0xC000_0708, 170, 16, "The requested resource is in use."), // STATUS_RESOURCE_IN_USE
	StatusRecord::new(0xC000_0709, 779, 0, "The system has detected an uncorrectable hardware memory error.\n\nThe affected memory has been taken offline; data stored there may have been lost."), // STATUS_HARDWARE_MEMORY_ERROR
	StatusRecord::new(0xC000_070A, 6, 9, "An invalid thread, handle %p, is specified for this operation. Possibly, a threadpool worker thread was specified."), // STATUS_THREADPOOL_HANDLE_EXCEPTION
	StatusRecord::new(0xC000_070B, 1, 22, "The threadpool failed to set an event on completion of the callback."), // STATUS_THREADPOOL_SET_EVENT_ON_COMPLETION_FAILED
	StatusRecord::new(0xC000_070C, 1, 22, "The threadpool failed to release a semaphore on completion of the callback."), // STATUS_THREADPOOL_RELEASE_SEMAPHORE_ON_COMPLETION_FAILED
	StatusRecord::new(0xC000_070D, 1, 22, "The threadpool failed to release a mutex on completion of the callback."), // STATUS_THREADPOOL_RELEASE_MUTEX_ON_COMPLETION_FAILED
	StatusRecord::new(0xC000_070E, 1, 22, "The threadpool failed to free a library on completion of the callback."), // STATUS_THREADPOOL_FREE_LIBRARY_ON_COMPLETION_FAILED
	StatusRecord::new(0xC000_070F, 1, 22, "The threadpool was released while a callback was still running."), // STATUS_THREADPOOL_RELEASED_DURING_OPERATION
	StatusRecord::new(0xC000_0710, 1, 22, "A threadpool worker thread is impersonating a client, after a callback to %p(%p). This is unexpected, indicating that the callback is missing a call to revert the impersonation."), // STATUS_CALLBACK_RETURNED_WHILE_IMPERSONATING
	StatusRecord::new(0xC000_0711, 1, 22, "A threadpool worker thread is impersonating a client, after executing an APC. This is unexpected, indicating that the APC is missing a call to revert the impersonation."), // STATUS_APC_RETURNED_WHILE_IMPERSONATING
	StatusRecord::new(0xC000_0712, 5, 13, "Either the target process, or the target thread's containing process, is a protected process."), // STATUS_PROCESS_IS_PROTECTED
	StatusRecord::new(0xC000_0713, 1, 22, "A thread is getting dispatched with MCA EXCEPTION because of MCA."), // STATUS_MCA_EXCEPTION
	StatusRecord::new(0xC000_0714, 1351, 0, "The client certificate account mapping is not unique."), // STATUS_CERTIFICATE_MAPPING_NOT_UNIQUE
	StatusRecord::new(0xC000_0715, 1463, 0, "The symbolic link cannot be followed because its type is disabled."), // STATUS_SYMLINK_CLASS_DISABLED
	StatusRecord::new(0xC000_0716, 123, 22, "Indicates that the specified string is not valid for IDN normalization."), // STATUS_INVALID_IDN_NORMALIZATION
	StatusRecord::new(0xC000_0717, 1113, 42, "No mapping for the Unicode character exists in the target multi-byte code page."), // STATUS_NO_UNICODE_TRANSLATION
	StatusRecord::new(0xC000_0718, 1242, 0, "The provided callback is already registered."), // STATUS_ALREADY_REGISTERED
	StatusRecord::new(0xC000_0719, 1, 22, "The provided context did not match the target."), // STATUS_CONTEXT_MISMATCH
	StatusRecord::new(0xC000_071A, 1, 22, "The specified port already has a completion list."), // STATUS_PORT_ALREADY_HAS_COMPLETION_LIST
	StatusRecord::new(0xC000_071B, 1, 22, "A threadpool worker thread entered a callback at thread base priority 0x%x and exited at priority 0x%x."), // STATUS_CALLBACK_RETURNED_THREAD_PRIORITY
	StatusRecord::new(0xC000_071C, 1, 22, "An invalid thread, handle %p, is specified for this operation. Possibly, a threadpool worker thread was specified."), // STATUS_INVALID_THREAD
	StatusRecord::new(0xC000_071D, 1, 22, "A threadpool worker thread entered a callback, which left transaction state."), // STATUS_CALLBACK_RETURNED_TRANSACTION
	StatusRecord::new(0xC000_071E, 1, 22, "A threadpool worker thread entered a callback, which left the loader lock held."), // STATUS_CALLBACK_RETURNED_LDR_LOCK
	StatusRecord::new(0xC000_071F, 1, 22, "A threadpool worker thread entered a callback, which left with preferred languages set."), // STATUS_CALLBACK_RETURNED_LANG
	StatusRecord::new(0xC000_0720, 1, 22, "A threadpool worker thread entered a callback, which left with background priorities set."), // STATUS_CALLBACK_RETURNED_PRI_BACK
	StatusRecord::new(0xC000_0721, 1, 22, "A threadpool worker thread entered a callback at thread affinity %p and exited at affinity %p."), // STATUS_CALLBACK_RETURNED_THREAD_AFFINITY
	StatusRecord::new(0xC000_0722, 1, 22, "The number of handles passed in the ALPC message exceeds the maximum."), // STATUS_LPC_HANDLE_COUNT_EXCEEDED
	StatusRecord::new(0xC000_0723, 1, 22, "The request was denied because it would write to executable memory."), // STATUS_EXECUTABLE_MEMORY_WRITE
	StatusRecord::new(0xC000_0724, 1, 22, "The request was denied because it would write to kernel executable memory."), // STATUS_KERNEL_EXECUTABLE_MEMORY_WRITE
	StatusRecord::new(0xC000_0725, 1, 22, "The request was denied because it would write to executable memory of an attached process."), // STATUS_ATTACHED_EXECUTABLE_MEMORY_WRITE
	StatusRecord::new(0xC000_0726, 1, 22, "The request was denied because a triggered write to executable memory was detected."), // STATUS_TRIGGERED_EXECUTABLE_MEMORY_WRITE
	StatusRecord::new(0xC000_0800, 1, 22, "The attempted operation required self healing to be enabled."), // STATUS_DISK_REPAIR_DISABLED
	StatusRecord::new(0xC000_0801, 8612, 0, "The directory service cannot perform the requested operation because a domain rename operation is in progress."), // STATUS_DS_DOMAIN_RENAME_IN_PROGRESS
	StatusRecord::new(0xC000_0802, 1295, 0, "An operation failed because the storage quota was exceeded."), // STATUS_DISK_QUOTA_EXCEEDED
	StatusRecord::new(0xC000_0804, 1296, 0, "An operation failed because the content was blocked."), // STATUS_CONTENT_BLOCKED
	StatusRecord::new(0xC000_0805, 1, 22, "The operation could not be completed due to bad clusters on disk."), // STATUS_BAD_CLUSTERS
	StatusRecord::new(0xC000_0806, 6851, 0, "The operation could not be completed because the volume is dirty. Please run the Chkdsk utility and try again."), // STATUS_VOLUME_DIRTY
	StatusRecord::new(0xC000_0808, 1, 22, "The disk repair operation was unsuccessful."), // STATUS_DISK_REPAIR_UNSUCCESSFUL
	StatusRecord::new(0xC000_0809, 1, 22, "The corruption log for this volume is full."), // STATUS_CORRUPT_LOG_OVERFULL
	StatusRecord::new(0xC000_080A, 1, 22, "The corruption log for this volume is corrupted."), // STATUS_CORRUPT_LOG_CORRUPTED
	StatusRecord::new(0xC000_080B, 1, 22, "The corruption log for this volume is unavailable."), // STATUS_CORRUPT_LOG_UNAVAILABLE
	StatusRecord::new(0xC000_080C, 1, 22, "The corruption log for this volume was deleted while full."), // STATUS_CORRUPT_LOG_DELETED_FULL
	StatusRecord::new(0xC000_080D, 1, 22, "The corruption log for this volume was cleared."), // STATUS_CORRUPT_LOG_CLEARED
	StatusRecord::new(0xC000_080E, 1, 22, "The orphan name space for this volume is exhausted."), // STATUS_ORPHAN_NAME_EXHAUSTED
	StatusRecord::new(0xC000_080F, 1, 22, "A proactive scan is in progress on the volume."), // STATUS_PROACTIVE_SCAN_IN_PROGRESS
	StatusRecord::new(0xC000_0810, 1, 22, "Encrypted I/O is not possible on this file."), // STATUS_ENCRYPTED_IO_NOT_POSSIBLE
	StatusRecord::new(0xC000_0811, 1, 22, "The corruption log contains records from a newer version of Windows."), // STATUS_CORRUPT_LOG_UPLEVEL_RECORDS
	StatusRecord::new(0xC000_0901, 220, 0, "This file is checked out or locked for editing by another user."), // STATUS_FILE_CHECKED_OUT
	StatusRecord::new(0xC000_0902, 221, 0, "The file must be checked out before saving changes."), // STATUS_CHECKOUT_REQUIRED
	StatusRecord::new(0xC000_0903, 222, 0, "The file type being saved or retrieved has been blocked."), // STATUS_BAD_FILE_TYPE
	StatusRecord::new(0xC000_0904, 223, 0, "The file size exceeds the limit allowed and cannot be saved."), // STATUS_FILE_TOO_LARGE
	StatusRecord::new(0xC000_0905, 224, 0, "Access Denied. Before opening files in this location, you must first browse to the e.g. site and select the option to log on automatically."), // STATUS_FORMS_AUTH_REQUIRED
	StatusRecord::new(0xC000_0906, 225, 0, "The operation did not complete successfully because the file contains a virus."), // STATUS_VIRUS_INFECTED
	StatusRecord::new(0xC000_0907, 226, 0, "This file contains a virus and cannot be opened. Due to the nature of this virus, the file has been removed from this location."), // STATUS_VIRUS_DELETED
	StatusRecord::new(0xC000_0908, 1, 22, "The resources required for this device conflict with the MCFG table."), // STATUS_BAD_MCFG_TABLE
	StatusRecord::new(0xC000_090A, 1, 22, "Bad key."), // STATUS_BAD_KEY
	StatusRecord::new(0xC000_090B, 13, 22, "Bad data."), // STATUS_BAD_DATA
	StatusRecord::new(0xC000_090C, 1, 22, "Key does not exist."), // STATUS_NO_KEY
	StatusRecord::new(0xC000_0910, 806, 0, "Access to the specified file handle has been revoked."), // STATUS_FILE_HANDLE_REVOKED
	StatusRecord::new(0xC000_9898, 670, 0, "WOW Assertion Error."), // STATUS_WOW_ASSERTION
	StatusRecord::new(0xC000_A000, 1, 22, "The cryptographic signature is invalid."), // STATUS_INVALID_SIGNATURE
	StatusRecord::new(0xC000_A001, 1, 22, "The cryptographic provider does not support HMAC."), // STATUS_HMAC_NOT_SUPPORTED
	StatusRecord::new(0xC000_A002, 1, 22, "The computed authentication tag did not match the input authentication tag."), // STATUS_AUTH_TAG_MISMATCH
	StatusRecord::new(0xC000_A003, 1, 22, "The requested state transition is invalid and cannot be completed."), // STATUS_INVALID_STATE_TRANSITION
	StatusRecord::new(0xC000_A004, 340, 0, "The version number specified in the kernel information is invalid."), // STATUS_INVALID_KERNEL_INFO_VERSION
	StatusRecord::new(0xC000_A005, 341, 0, "The version number specified in the PEP information is invalid."), // STATUS_INVALID_PEP_INFO_VERSION
	StatusRecord::new(0xC000_A006, 806, 0, "The handle has been revoked."), // STATUS_HANDLE_REVOKED
	StatusRecord::new(0xC000_A007, 1, 22, "The file system encountered end of file on a ghosted range."), // STATUS_EOF_ON_GHOSTED_RANGE
	StatusRecord::new(0xC000_A010, 1, 22, "The IPsec queue overflowed."), // STATUS_IPSEC_QUEUE_OVERFLOW
	StatusRecord::new(0xC000_A011, 1, 22, "The neighbor discovery queue overflowed."), // STATUS_ND_QUEUE_OVERFLOW
	StatusRecord::new(0xC000_A012, 1, 22, "An ICMP hop limit exceeded error was received."), // STATUS_HOPLIMIT_EXCEEDED
	StatusRecord::new(0xC000_A013, 1, 22, "The protocol is not installed on the local machine."), // STATUS_PROTOCOL_NOT_SUPPORTED
	StatusRecord::new(0xC000_A014, 1, 22, "The network fast path rejected the request."), // STATUS_FASTPATH_REJECTED
	StatusRecord::new(0xC000_A080, 788, 0, "{Delayed Write Failed}\nWindows was unable to save all the data for the file %hs; the data has been lost.\nThis error may be caused by network connectivity issues. Please try to save this file elsewhere."), // STATUS_LOST_WRITEBEHIND_DATA_NETWORK_DISCONNECTED
	StatusRecord::new(0xC000_A081, 789, 0, "{Delayed Write Failed}\nWindows was unable to save all the data for the file %hs; the data has been lost.\nThis error was returned by the server on which the file exists. Please try to save this file elsewhere."), // STATUS_LOST_WRITEBEHIND_DATA_NETWORK_SERVER_ERROR
	StatusRecord::new(0xC000_A082, 790, 0, "{Delayed Write Failed}\nWindows was unable to save all the data for the file %hs; the data has been lost.\nThis error may be caused if the device has been removed or the media is write-protected."), // STATUS_LOST_WRITEBEHIND_DATA_LOCAL_DISK_ERROR
	StatusRecord::new(0xC000_A083, 1465, 0, "The system was unable to parse the requested XML data."), // STATUS_XML_PARSE_ERROR_WINDOWS
	StatusRecord::new(0xC000_A084, 1466, 0, "An error was encountered while processing an XML digital signature."), // STATUS_XMLDSIG_ERROR_WINDOWS
	StatusRecord::new(0xC000_A085, 1468, 0, "This indicates that the caller made the connection request in the wrong routing compartment."), // STATUS_WRONG_COMPARTMENT_WINDOWS
	StatusRecord::new(0xC000_A086, 1469, 0, "This indicates that there was an AuthIP failure when attempting to connect to the remote host."), // STATUS_AUTHIP_FAILURE_WINDOWS
	StatusRecord::new(0xC000_A087, 8634, 0, "OID mapped groups cannot have members."), // STATUS_DS_OID_MAPPED_GROUP_CANT_HAVE_MEMBERS_WINDOWS
	StatusRecord::new(0xC000_A088, 8635, 0, "The specified OID cannot be found."), // STATUS_DS_OID_NOT_FOUND_WINDOWS
	StatusRecord::new(0xC000_A089, 8646, 0, "The account type is incorrect for the requested operation."), // STATUS_INCORRECT_ACCOUNT_TYPE_WINDOWS
	StatusRecord::new(0xC000_A100, 1470, 0, "Hash generation for the specified version and hash type is not enabled on server."), // STATUS_HASH_NOT_SUPPORTED_WINDOWS
	StatusRecord::new(0xC000_A101, 1471, 0, "The hash requests is not present or not up to date with the current file contents."), // STATUS_HASH_NOT_PRESENT
	StatusRecord::new(0xC000_A121, 1, 22, "A file system filter on the server has not opted in for Offload Read support."), // STATUS_SECONDARY_IC_PROVIDER_NOT_REGISTERED
	StatusRecord::new(0xC000_A122, 15322, 0, "The client information specified for the GPIO controller is invalid."), // STATUS_GPIO_CLIENT_INFORMATION_INVALID
	StatusRecord::new(0xC000_A123, 15323, 0, "The version specified by the client is not supported."), // STATUS_GPIO_VERSION_NOT_SUPPORTED
	StatusRecord::new(0xC000_A124, 15324, 0, "The registration packet supplied by the client is not valid."), // STATUS_GPIO_INVALID_REGISTRATION_PACKET
	StatusRecord::new(0xC000_A125, 15325, 0, "The requested operation is not supported for the specified handle."), // STATUS_GPIO_OPERATION_DENIED
	StatusRecord::new(0xC000_A126, 15326, 0, "The requested connect mode conflicts with an existing mode on one or more of the specified pins."), // STATUS_GPIO_INCOMPATIBLE_CONNECT_MODE
	StatusRecord::new(0xC000_A141, 15400, 0, "The system's runlevel cannot be switched."), // STATUS_CANNOT_SWITCH_RUNLEVEL
	StatusRecord::new(0xC000_A142, 15401, 0, "The specified runlevel is invalid."), // STATUS_INVALID_RUNLEVEL_SETTING
	StatusRecord::new(0xC000_A143, 15402, 0, "The runlevel switch timed out."), // STATUS_RUNLEVEL_SWITCH_TIMEOUT
	StatusRecord::new(0xC000_A145, 15403, 0, "A runlevel switch agent timed out."), // STATUS_RUNLEVEL_SWITCH_AGENT_TIMEOUT
	StatusRecord::new(0xC000_A146, 15404, 0, "A runlevel switch is currently in progress."), // STATUS_RUNLEVEL_SWITCH_IN_PROGRESS
	StatusRecord::new(0xC000_A200, 4250, 0, "This operation is only valid in the context of an app container."), // STATUS_NOT_APPCONTAINER
	StatusRecord::new(0xC000_A201, 4251, 0, "This functionality is not supported in the context of an app container."), // STATUS_NOT_SUPPORTED_IN_APPCONTAINER
	StatusRecord::new(0xC000_A202, 4252, 0, "The length of the SID supplied is not a valid length for app container SIDs."), // STATUS_INVALID_PACKAGE_SID_LENGTH
	StatusRecord::new(0xC000_A203, 5, 13, "Access to the specified resource has been denied for a less privileged app container."), // STATUS_LPAC_ACCESS_DENIED
	StatusRecord::new(0xC000_A204, 5, 13, "Access to the specified resource has been denied by adminless restrictions."), // STATUS_ADMINLESS_ACCESS_DENIED
	StatusRecord::new(0xC000_A281, 4400, 0, "The app data store was not found."), // STATUS_APP_DATA_NOT_FOUND
	StatusRecord::new(0xC000_A282, 4401, 0, "The app data store has expired."), // STATUS_APP_DATA_EXPIRED
	StatusRecord::new(0xC000_A283, 4402, 0, "The app data store is corrupt."), // STATUS_APP_DATA_CORRUPT
	StatusRecord::new(0xC000_A284, 4403, 0, "The app data store has exceeded its limit."), // STATUS_APP_DATA_LIMIT_EXCEEDED
	StatusRecord::new(0xC000_A285, 4404, 0, "A reboot is required to complete the app data operation."), // STATUS_APP_DATA_REBOOT_REQUIRED
	StatusRecord::new(0xC000_A2A1, 4440, 0, "A file system filter on the server has not opted in for Offload Read support."), // STATUS_OFFLOAD_READ_FLT_NOT_SUPPORTED
	StatusRecord::new(0xC000_A2A2, 4441, 0, "A file system filter on the server has not opted in for Offload Write support."), // STATUS_OFFLOAD_WRITE_FLT_NOT_SUPPORTED
	StatusRecord::new(0xC000_A2A3, 4442, 0, "Offload read operations cannot be performed on the specified file."), // STATUS_OFFLOAD_READ_FILE_NOT_SUPPORTED
	StatusRecord::new(0xC000_A2A4, 4443, 0, "Offload write operations cannot be performed on the specified file."), // STATUS_OFFLOAD_WRITE_FILE_NOT_SUPPORTED
	StatusRecord::new(0xC000_A2A5, 4448, 0, "The WIM header of the backing file is corrupt."), // STATUS_WOF_WIM_HEADER_CORRUPT
	StatusRecord::new(0xC000_A2A6, 4449, 0, "The WIM resource table of the backing file is corrupt."), // STATUS_WOF_WIM_RESOURCE_TABLE_CORRUPT
	StatusRecord::new(0xC000_A2A7, 4450, 0, "The file resource table of the backing file is corrupt."), // STATUS_WOF_FILE_RESOURCE_TABLE_CORRUPT
	StatusRecord::new(0xC000_CF00, 362, 0, "The cloud sync root metadata is corrupted."), // STATUS_CLOUD_FILE_SYNC_ROOT_METADATA_CORRUPT
	StatusRecord::new(0xC000_CF01, 362, 0, "The cloud file provider is not running."), // STATUS_CLOUD_FILE_PROVIDER_NOT_RUNNING
	StatusRecord::new(0xC000_CF02, 363, 0, "The cloud file metadata is corrupt and unreadable."), // STATUS_CLOUD_FILE_METADATA_CORRUPT
	StatusRecord::new(0xC000_CF03, 364, 0, "The cloud file metadata is too large."), // STATUS_CLOUD_FILE_METADATA_TOO_LARGE
	StatusRecord::new(0xC000_CF06, 366, 0, "The version of the cloud file property store is not supported."), // STATUS_CLOUD_FILE_PROPERTY_VERSION_NOT_SUPPORTED
	StatusRecord::new(0xC000_CF07, 376, 0, "The file is not a cloud file."), // STATUS_NOT_A_CLOUD_FILE
	StatusRecord::new(0xC000_CF08, 377, 0, "The file is not in sync with the cloud."), // STATUS_CLOUD_FILE_NOT_IN_SYNC
	StatusRecord::new(0xC000_CF09, 378, 0, "The cloud sync root is already connected with another cloud sync provider."), // STATUS_CLOUD_FILE_ALREADY_CONNECTED
	StatusRecord::new(0xC000_CF0A, 379, 0, "The operation is not supported by the cloud sync provider."), // STATUS_CLOUD_FILE_NOT_SUPPORTED
	StatusRecord::new(0xC000_CF0B, 380, 0, "The cloud operation is invalid."), // STATUS_CLOUD_FILE_INVALID_REQUEST
	StatusRecord::new(0xC000_CF0C, 381, 0, "The cloud operation is not supported on a read-only volume."), // STATUS_CLOUD_FILE_READ_ONLY_VOLUME
	StatusRecord::new(0xC000_CF0D, 382, 0, "The operation is reserved for a connected cloud sync provider."), // STATUS_CLOUD_FILE_CONNECTED_PROVIDER_ONLY
	StatusRecord::new(0xC000_CF0E, 383, 0, "The cloud sync provider failed to validate the downloaded data."), // STATUS_CLOUD_FILE_VALIDATION_FAILED
	StatusRecord::new(0xC000_CF0F, 386, 0, "The cloud sync provider failed user authentication."), // STATUS_CLOUD_FILE_AUTHENTICATION_FAILED
	StatusRecord::new(0xC000_CF10, 387, 0, "The cloud sync provider failed to perform the operation due to low system resources."), // STATUS_CLOUD_FILE_INSUFFICIENT_RESOURCES
	StatusRecord::new(0xC000_CF11, 388, 0, "The cloud sync provider failed to perform the operation due to network being unavailable."), // STATUS_CLOUD_FILE_NETWORK_UNAVAILABLE
	StatusRecord::new(0xC000_CF12, 389, 0, "The cloud operation was unsuccessful."), // STATUS_CLOUD_FILE_UNSUCCESSFUL
	StatusRecord::new(0xC000_CF13, 390, 0, "The operation is only supported on files under a cloud sync root."), // STATUS_CLOUD_FILE_NOT_UNDER_SYNC_ROOT
	StatusRecord::new(0xC000_CF14, 391, 0, "The operation cannot be performed on cloud files in use."), // STATUS_CLOUD_FILE_IN_USE
	StatusRecord::new(0xC000_CF15, 392, 0, "The operation cannot be performed on pinned cloud files."), // STATUS_CLOUD_FILE_PINNED
	StatusRecord::new(0xC000_CF16, 393, 0, "The cloud operation was aborted."), // STATUS_CLOUD_FILE_REQUEST_ABORTED
	StatusRecord::new(0xC000_CF17, 394, 0, "The cloud file's property store is corrupt."), // STATUS_CLOUD_FILE_PROPERTY_CORRUPT
	StatusRecord::new(0xC000_CF18, 395, 0, "Access to the cloud file is denied."), // STATUS_CLOUD_FILE_ACCESS_DENIED
	StatusRecord::new(0xC000_CF19, 396, 0, "The cloud operation cannot be performed on a file with incompatible hardlinks."), // STATUS_CLOUD_FILE_INCOMPATIBLE_HARDLINKS
	StatusRecord::new(0xC000_CF1A, 397, 0, "The operation failed due to a conflicting cloud file property lock."), // STATUS_CLOUD_FILE_PROPERTY_LOCK_CONFLICT
	StatusRecord::new(0xC000_CF1B, 398, 0, "The cloud operation was canceled by user."), // STATUS_CLOUD_FILE_REQUEST_CANCELED
	StatusRecord::new(0xC000_CF1D, 404, 0, "The cloud file provider exited unexpectedly."), // STATUS_CLOUD_FILE_PROVIDER_TERMINATED
	StatusRecord::new(0xC000_CF1F, 405, 0, "The file is not a cloud sync root."), // STATUS_NOT_A_CLOUD_SYNC_ROOT

	StatusRecord::new(0xC001_0001, 0, 0, "Debugger did not perform a state change."), // DBG_NO_STATE_CHANGE
	StatusRecord::new(0xC001_0002, 0, 0, "Debugger has found the application is not idle."), // DBG_APP_NOT_IDLE

	StatusRecord::new(0xC002_0001, 1700, 0, "The string binding is invalid."), // RPC_NT_INVALID_STRING_BINDING
	StatusRecord::new(0xC002_0002, 1701, 0, "The binding handle is not the correct type."), // RPC_NT_WRONG_KIND_OF_BINDING
	StatusRecord::new(0xC002_0003, 1702, 0, "The binding handle is invalid."), // RPC_NT_INVALID_BINDING
	StatusRecord::new(0xC002_0004, 1703, 0, "The RPC protocol sequence is not supported."), // RPC_NT_PROTSEQ_NOT_SUPPORTED
	StatusRecord::new(0xC002_0005, 1704, 0, "The RPC protocol sequence is invalid."), // RPC_NT_INVALID_RPC_PROTSEQ
	StatusRecord::new(0xC002_0006, 1705, 0, "The string UUID is invalid."), // RPC_NT_INVALID_STRING_UUID
	StatusRecord::new(0xC002_0007, 1706, 0, "The endpoint format is invalid."), // RPC_NT_INVALID_ENDPOINT_FORMAT
	StatusRecord::new(0xC002_0008, 1707, 0, "The network address is invalid."), // RPC_NT_INVALID_NET_ADDR
	StatusRecord::new(0xC002_0009, 1708, 0, "No endpoint was found."), // RPC_NT_NO_ENDPOINT_FOUND
	StatusRecord::new(0xC002_000A, 1709, 0, "The timeout value is invalid."), // RPC_NT_INVALID_TIMEOUT
	StatusRecord::new(0xC002_000B, 1710, 0, "The object UUID was not found."), // RPC_NT_OBJECT_NOT_FOUND
	StatusRecord::new(0xC002_000C, 1711, 0, "The object UUID has already been registered."), // RPC_NT_ALREADY_REGISTERED
	StatusRecord::new(0xC002_000D, 1712, 0, "The type UUID has already been registered."), // RPC_NT_TYPE_ALREADY_REGISTERED
	StatusRecord::new(0xC002_000E, 1713, 0, "The RPC server is already listening."), // RPC_NT_ALREADY_LISTENING
	StatusRecord::new(0xC002_000F, 1714, 0, "No protocol sequences have been registered."), // RPC_NT_NO_PROTSEQS_REGISTERED
	StatusRecord::new(0xC002_0010, 1715, 0, "The RPC server is not listening."), // RPC_NT_NOT_LISTENING
	StatusRecord::new(0xC002_0011, 1716, 0, "The manager type is unknown."), // RPC_NT_UNKNOWN_MGR_TYPE
	StatusRecord::new(0xC002_0012, 1717, 0, "The interface is unknown."), // RPC_NT_UNKNOWN_IF
	StatusRecord::new(0xC002_0013, 1718, 0, "There are no bindings."), // RPC_NT_NO_BINDINGS
	StatusRecord::new(0xC002_0014, 1719, 0, "There are no protocol sequences."), // RPC_NT_NO_PROTSEQS
	StatusRecord::new(0xC002_0015, 1720, 0, "The endpoint cannot be created."), // RPC_NT_CANT_CREATE_ENDPOINT
	StatusRecord::new(0xC002_0016, 1721, 0, "Not enough resources are available to complete this operation."), // RPC_NT_OUT_OF_RESOURCES
	StatusRecord::new(0xC002_0017, 1722, 0, "The RPC server is unavailable."), // RPC_NT_SERVER_UNAVAILABLE
	StatusRecord::new(0xC002_0018, 1723, 0, "The RPC server is too busy to complete this operation."), // RPC_NT_SERVER_TOO_BUSY
	StatusRecord::new(0xC002_0019, 1724, 0, "The network options are invalid."), // RPC_NT_INVALID_NETWORK_OPTIONS
	StatusRecord::new(0xC002_001A, 1725, 0, "There are no remote procedure calls active on this thread."), // RPC_NT_NO_CALL_ACTIVE
	StatusRecord::new(0xC002_001B, 1726, 0, "The remote procedure call failed."), // RPC_NT_CALL_FAILED
	StatusRecord::new(0xC002_001C, 1727, 0, "The remote procedure call failed and did not execute."), // RPC_NT_CALL_FAILED_DNE
	StatusRecord::new(0xC002_001D, 1728, 0, "An RPC protocol error occurred."), // RPC_NT_PROTOCOL_ERROR
	StatusRecord::new(0xC002_001F, 1730, 0, "The transfer syntax is not supported by the RPC server."), // RPC_NT_UNSUPPORTED_TRANS_SYN
	StatusRecord::new(0xC002_0021, 1732, 0, "The type UUID is not supported."), // RPC_NT_UNSUPPORTED_TYPE
	StatusRecord::new(0xC002_0022, 1733, 0, "The tag is invalid."), // RPC_NT_INVALID_TAG
	StatusRecord::new(0xC002_0023, 1734, 0, "The array bounds are invalid."), // RPC_NT_INVALID_BOUND
	StatusRecord::new(0xC002_0024, 1735, 0, "The binding does not contain an entry name."), // RPC_NT_NO_ENTRY_NAME
	StatusRecord::new(0xC002_0025, 1736, 0, "The name syntax is invalid."), // RPC_NT_INVALID_NAME_SYNTAX
	StatusRecord::new(0xC002_0026, 1737, 0, "The name syntax is not supported."), // RPC_NT_UNSUPPORTED_NAME_SYNTAX
	StatusRecord::new(0xC002_0028, 1739, 0, "No network address is available to use to construct a UUID."), // RPC_NT_UUID_NO_ADDRESS
	StatusRecord::new(0xC002_0029, 1740, 0, "The endpoint is a duplicate."), // RPC_NT_DUPLICATE_ENDPOINT
	StatusRecord::new(0xC002_002A, 1741, 0, "The authentication type is unknown."), // RPC_NT_UNKNOWN_AUTHN_TYPE
	StatusRecord::new(0xC002_002B, 1742, 0, "The maximum number of calls is too small."), // RPC_NT_MAX_CALLS_TOO_SMALL
	StatusRecord::new(0xC002_002C, 1743, 0, "The string is too long."), // RPC_NT_STRING_TOO_LONG
	StatusRecord::new(0xC002_002D, 1744, 0, "The RPC protocol sequence was not found."), // RPC_NT_PROTSEQ_NOT_FOUND
	StatusRecord::new(0xC002_002E, 1745, 0, "The procedure number is out of range."), // RPC_NT_PROCNUM_OUT_OF_RANGE
	StatusRecord::new(0xC002_002F, 1746, 0, "The binding does not contain any authentication information."), // RPC_NT_BINDING_HAS_NO_AUTH
	StatusRecord::new(0xC002_0030, 1747, 0, "The authentication service is unknown."), // RPC_NT_UNKNOWN_AUTHN_SERVICE
	StatusRecord::new(0xC002_0031, 1748, 0, "The authentication level is unknown."), // RPC_NT_UNKNOWN_AUTHN_LEVEL
	StatusRecord::new(0xC002_0032, 1749, 0, "The security context is invalid."), // RPC_NT_INVALID_AUTH_IDENTITY
	StatusRecord::new(0xC002_0033, 1750, 0, "The authorization service is unknown."), // RPC_NT_UNKNOWN_AUTHZ_SERVICE
	StatusRecord::new(0xC002_0034, 1751, 0, "The entry is invalid."), // EPT_NT_INVALID_ENTRY
	StatusRecord::new(0xC002_0035, 1752, 0, "The operation cannot be performed."), // EPT_NT_CANT_PERFORM_OP
	StatusRecord::new(0xC002_0036, 1753, 0, "There are no more endpoints available from the endpoint mapper."), // EPT_NT_NOT_REGISTERED
	StatusRecord::new(0xC002_0037, 1754, 0, "No interfaces have been exported."), // RPC_NT_NOTHING_TO_EXPORT
	StatusRecord::new(0xC002_0038, 1755, 0, "The entry name is incomplete."), // RPC_NT_INCOMPLETE_NAME
	StatusRecord::new(0xC002_0039, 1756, 0, "The version option is invalid."), // RPC_NT_INVALID_VERS_OPTION
	StatusRecord::new(0xC002_003A, 1757, 0, "There are no more members."), // RPC_NT_NO_MORE_MEMBERS
	StatusRecord::new(0xC002_003B, 1758, 0, "There is nothing to unexport."), // RPC_NT_NOT_ALL_OBJS_UNEXPORTED
	StatusRecord::new(0xC002_003C, 1759, 0, "The interface was not found."), // RPC_NT_INTERFACE_NOT_FOUND
	StatusRecord::new(0xC002_003D, 1760, 0, "The entry already exists."), // RPC_NT_ENTRY_ALREADY_EXISTS
	StatusRecord::new(0xC002_003E, 1761, 0, "The entry is not found."), // RPC_NT_ENTRY_NOT_FOUND
	StatusRecord::new(0xC002_003F, 1762, 0, "The name service is unavailable."), // RPC_NT_NAME_SERVICE_UNAVAILABLE
	StatusRecord::new(0xC002_0040, 1763, 0, "The network address family is invalid."), // RPC_NT_INVALID_NAF_ID
	StatusRecord::new(0xC002_0041, 1764, 0, "The requested operation is not supported."), // RPC_NT_CANNOT_SUPPORT
	StatusRecord::new(0xC002_0042, 1765, 0, "No security context is available to allow impersonation."), // RPC_NT_NO_CONTEXT_AVAILABLE
	StatusRecord::new(0xC002_0043, 1766, 0, "An internal error occurred in RPC."), // RPC_NT_INTERNAL_ERROR
	StatusRecord::new(0xC002_0044, 1767, 0, "The RPC server attempted an integer divide by zero."), // RPC_NT_ZERO_DIVIDE
	StatusRecord::new(0xC002_0045, 1768, 0, "An addressing error occurred in the RPC server."), // RPC_NT_ADDRESS_ERROR
	StatusRecord::new(0xC002_0046, 1769, 0, "A floating point operation at the RPC server caused a divide by zero."), // RPC_NT_FP_DIV_ZERO
	StatusRecord::new(0xC002_0047, 1770, 0, "A floating point underflow occurred at the RPC server."), // RPC_NT_FP_UNDERFLOW
	StatusRecord::new(0xC002_0048, 1771, 0, "A floating point overflow occurred at the RPC server."), // RPC_NT_FP_OVERFLOW
	StatusRecord::new(0xC002_0049, 1791, 0, "A remote procedure call is already in progress for this thread."), // RPC_NT_CALL_IN_PROGRESS
	StatusRecord::new(0xC002_004A, 1806, 0, "There are no more bindings."), // RPC_NT_NO_MORE_BINDINGS
	StatusRecord::new(0xC002_004B, 1898, 0, "The group member was not found."), // RPC_NT_GROUP_MEMBER_NOT_FOUND
	StatusRecord::new(0xC002_004C, 1899, 0, "The endpoint mapper database entry could not be created."), // EPT_NT_CANT_CREATE
	StatusRecord::new(0xC002_004D, 1900, 0, "The object UUID is the nil UUID."), // RPC_NT_INVALID_OBJECT
	StatusRecord::new(0xC002_004F, 1817, 0, "No interfaces have been registered."), // RPC_NT_NO_INTERFACES
	StatusRecord::new(0xC002_0050, 1818, 0, "The remote procedure call was cancelled."), // RPC_NT_CALL_CANCELLED
	StatusRecord::new(0xC002_0051, 1819, 0, "The binding handle does not contain all required information."), // RPC_NT_BINDING_INCOMPLETE
	StatusRecord::new(0xC002_0052, 1820, 0, "A communications failure occurred during a remote procedure call."), // RPC_NT_COMM_FAILURE
	StatusRecord::new(0xC002_0053, 1821, 0, "The requested authentication level is not supported."), // RPC_NT_UNSUPPORTED_AUTHN_LEVEL
	StatusRecord::new(0xC002_0054, 1822, 0, "No principal name registered."), // RPC_NT_NO_PRINC_NAME
	StatusRecord::new(0xC002_0055, 1823, 0, "The error specified is not a valid Windows RPC error code."), // RPC_NT_NOT_RPC_ERROR
	StatusRecord::new(0xC002_0057, 1825, 0, "A security package specific error occurred."), // RPC_NT_SEC_PKG_ERROR
	StatusRecord::new(0xC002_0058, 1826, 0, "Thread is not cancelled."), // RPC_NT_NOT_CANCELLED
	StatusRecord::new(0xC002_0062, 1914, 0, "Invalid asynchronous remote procedure call handle."), // RPC_NT_INVALID_ASYNC_HANDLE
	StatusRecord::new(0xC002_0063, 1915, 0, "Invalid asynchronous RPC call handle for this operation."), // RPC_NT_INVALID_ASYNC_CALL

	StatusRecord::new(0xC003_0001, 1772, 0, "The list of RPC servers available for auto-handle binding has been exhausted."), // RPC_NT_NO_MORE_ENTRIES
	StatusRecord::new(0xC003_0002, 1773, 0, "The file designated by DCERPCCHARTRANS cannot be opened."), // RPC_NT_SS_CHAR_TRANS_OPEN_FAIL
	StatusRecord::new(0xC003_0003, 1774, 0, "The file containing the character translation table has fewer than 512 bytes."), // RPC_NT_SS_CHAR_TRANS_SHORT_FILE
	StatusRecord::new(0xC003_0004, 1775, 0, "A null context handle is passed as an [in] parameter."), // RPC_NT_SS_IN_NULL_CONTEXT
	StatusRecord::new(0xC003_0005, 6, 9, "The context handle does not match any known context handles."), // RPC_NT_SS_CONTEXT_MISMATCH
	StatusRecord::new(0xC003_0006, 1777, 0, "The context handle changed during a call."), // RPC_NT_SS_CONTEXT_DAMAGED
	StatusRecord::new(0xC003_0007, 1778, 0, "The binding handles passed to a remote procedure call do not match."), // RPC_NT_SS_HANDLES_MISMATCH
	StatusRecord::new(0xC003_0008, 1779, 0, "The stub is unable to get the call handle."), // RPC_NT_SS_CANNOT_GET_CALL_HANDLE
	StatusRecord::new(0xC003_0009, 1780, 0, "A null reference pointer was passed to the stub."), // RPC_NT_NULL_REF_POINTER
	StatusRecord::new(0xC003_000A, 1781, 0, "The enumeration value is out of range."), // RPC_NT_ENUM_VALUE_OUT_OF_RANGE
	StatusRecord::new(0xC003_000B, 1782, 0, "The byte count is too small."), // RPC_NT_BYTE_COUNT_TOO_SMALL
	StatusRecord::new(0xC003_000C, 1783, 0, "The stub received bad data."), // RPC_NT_BAD_STUB_DATA
	StatusRecord::new(0xC003_0059, 1827, 0, "Invalid operation on the encoding/decoding handle."), // RPC_NT_INVALID_ES_ACTION
	StatusRecord::new(0xC003_005A, 1828, 0, "Incompatible version of the serializing package."), // RPC_NT_WRONG_ES_VERSION
	StatusRecord::new(0xC003_005B, 1829, 0, "Incompatible version of the RPC stub."), // RPC_NT_WRONG_STUB_VERSION
	StatusRecord::new(0xC003_005C, 1830, 0, "The RPC pipe object is invalid or corrupt."), // RPC_NT_INVALID_PIPE_OBJECT
	StatusRecord::new(0xC003_005D, 1831, 0, "An invalid operation was attempted on an RPC pipe object."), // RPC_NT_INVALID_PIPE_OPERATION
	StatusRecord::new(0xC003_005E, 1832, 0, "Unsupported RPC pipe version."), // RPC_NT_WRONG_PIPE_VERSION
	StatusRecord::new(0xC003_005F, 1916, 0, "The RPC pipe object has already been closed."), // RPC_NT_PIPE_CLOSED
	StatusRecord::new(0xC003_0060, 1917, 0, "The RPC call completed before all pipes were processed."), // RPC_NT_PIPE_DISCIPLINE_ERROR
	StatusRecord::new(0xC003_0061, 1918, 0, "No more data is available from the RPC pipe."), // RPC_NT_PIPE_EMPTY

	StatusRecord::new(0xC00A_0001, 7001, 0, "The specified session name is invalid."), // STATUS_CTX_WINSTATION_NAME_INVALID
	StatusRecord::new(0xC00A_0002, 7002, 0, "The specified protocol driver is invalid."), // STATUS_CTX_INVALID_PD
	StatusRecord::new(0xC00A_0003, 7003, 0, "The specified protocol driver was not found in the system path."), // STATUS_CTX_PD_NOT_FOUND
	StatusRecord::new(0xC00A_0006, 7007, 0, "A close operation is pending on the terminal connection."), // STATUS_CTX_CLOSE_PENDING
	StatusRecord::new(0xC00A_0007, 7008, 0, "No free output buffers are available."), // STATUS_CTX_NO_OUTBUF
	StatusRecord::new(0xC00A_0008, 7009, 0, "The MODEM.INF file was not found."), // STATUS_CTX_MODEM_INF_NOT_FOUND
	StatusRecord::new(0xC00A_0009, 7010, 0, "The modem (%1) was not found in the MODEM.INF file."), // STATUS_CTX_INVALID_MODEMNAME
	StatusRecord::new(0xC00A_000A, 7011, 0, "The modem did not accept the command sent to it. Verify that the configured modem name matches the attached modem."), // STATUS_CTX_RESPONSE_ERROR
	StatusRecord::new(0xC00A_000B, 7012, 0, "The modem did not respond to the command sent to it. Verify that the modem cable is properly attached and the modem is turned on."), // STATUS_CTX_MODEM_RESPONSE_TIMEOUT
	StatusRecord::new(0xC00A_000C, 7013, 0, "Carrier detection has failed or the carrier has been dropped due to disconnection."), // STATUS_CTX_MODEM_RESPONSE_NO_CARRIER
	StatusRecord::new(0xC00A_000D, 7014, 0, "A dial tone was not detected within the required time. Verify that the phone cable is properly attached and functional."), // STATUS_CTX_MODEM_RESPONSE_NO_DIALTONE
	StatusRecord::new(0xC00A_000E, 7015, 0, "A busy signal was detected at a remote site on callback."), // STATUS_CTX_MODEM_RESPONSE_BUSY
	StatusRecord::new(0xC00A_000F, 7016, 0, "A voice was detected at a remote site on callback."), // STATUS_CTX_MODEM_RESPONSE_VOICE
	StatusRecord::new(0xC00A_0010, 7017, 0, "Transport driver error."), // STATUS_CTX_TD_ERROR
	StatusRecord::new(0xC00A_0012, 7055, 0, "The client you are using is not licensed to use this system. Your logon request is denied."), // STATUS_CTX_LICENSE_CLIENT_INVALID
	StatusRecord::new(0xC00A_0013, 7054, 0, "The system has reached its licensed logon limit. Try again later."), // STATUS_CTX_LICENSE_NOT_AVAILABLE
	StatusRecord::new(0xC00A_0014, 7056, 0, "The system license has expired. Your logon request is denied."), // STATUS_CTX_LICENSE_EXPIRED
	StatusRecord::new(0xC00A_0015, 7022, 0, "The specified session cannot be found."), // STATUS_CTX_WINSTATION_NOT_FOUND
	StatusRecord::new(0xC00A_0016, 7023, 0, "The specified session name is already in use."), // STATUS_CTX_WINSTATION_NAME_COLLISION
	StatusRecord::new(0xC00A_0017, 7024, 0, "The requested operation cannot be completed because the terminal connection is currently processing a connect, disconnect, reset, or delete operation."), // STATUS_CTX_WINSTATION_BUSY
	StatusRecord::new(0xC00A_0018, 7025, 0, "An attempt has been made to connect to a session whose video mode is not supported by the current client."), // STATUS_CTX_BAD_VIDEO_MODE
	StatusRecord::new(0xC00A_0022, 7035, 0, "The application attempted to enable DOS graphics mode. DOS graphics mode is not supported."), // STATUS_CTX_GRAPHICS_INVALID
	StatusRecord::new(0xC00A_0024, 7037, 0, "The requested operation can be performed only on the system console. This is most often the result of a driver or system DLL requiring direct console access."), // STATUS_CTX_NOT_CONSOLE
	StatusRecord::new(0xC00A_0026, 7040, 0, "The client failed to respond to the server connect message."), // STATUS_CTX_CLIENT_QUERY_TIMEOUT
	StatusRecord::new(0xC00A_0027, 7041, 0, "Disconnecting the console session is not supported."), // STATUS_CTX_CONSOLE_DISCONNECT
	StatusRecord::new(0xC00A_0028, 7042, 0, "Reconnecting a disconnected session to the console is not supported."), // STATUS_CTX_CONSOLE_CONNECT
	StatusRecord::new(0xC00A_002A, 7044, 0, "The request to control another session remotely was denied."), // STATUS_CTX_SHADOW_DENIED
	StatusRecord::new(0xC00A_002B, 7045, 0, "A process has requested access to a session, but has not been granted those access rights."), // STATUS_CTX_WINSTATION_ACCESS_DENIED
	StatusRecord::new(0xC00A_002E, 7049, 0, "The terminal connection driver %1 is invalid."), // STATUS_CTX_INVALID_WD
	StatusRecord::new(0xC00A_002F, 7050, 0, "The terminal connection driver %1 was not found in the system path."), // STATUS_CTX_WD_NOT_FOUND
	StatusRecord::new(0xC00A_0030, 7051, 0, "The requested session cannot be controlled remotely. You cannot control your own session, a session that is trying to control your session, a session that has no user logged on, or other sessions from the console."), // STATUS_CTX_SHADOW_INVALID
	StatusRecord::new(0xC00A_0031, 7052, 0, "The requested session is not configured to allow remote control."), // STATUS_CTX_SHADOW_DISABLED
	StatusRecord::new(0xC00A_0032, 7065, 0, "The RDP protocol component %2 detected an error in the protocol stream and has disconnected the client."), // STATUS_RDP_PROTOCOL_ERROR
	StatusRecord::new(0xC00A_0033, 7053, 0, "Your request to connect to this terminal server has been rejected. Your terminal server client license number has not been entered for this copy of the terminal client. Contact your system administrator for help in entering a valid, unique license number for this terminal server client. Click OK to continue."), // STATUS_CTX_CLIENT_LICENSE_NOT_SET
	StatusRecord::new(0xC00A_0034, 7054, 0, "Your request to connect to this terminal server has been rejected. Your terminal server client license number is currently being used by another user. Contact your system administrator to obtain a new copy of the terminal server client with a valid, unique license number. Click OK to continue."), // STATUS_CTX_CLIENT_LICENSE_IN_USE
	StatusRecord::new(0xC00A_0035, 7057, 0, "The remote control of the console was terminated because the display mode was changed. Changing the display mode in a remote control session is not supported."), // STATUS_CTX_SHADOW_ENDED_BY_MODE_CHANGE
	StatusRecord::new(0xC00A_0036, 7058, 0, "Remote control could not be terminated because the specified session is not currently being remotely controlled."), // STATUS_CTX_SHADOW_NOT_RUNNING
	StatusRecord::new(0xC00A_0037, 7059, 0, "Your interactive logon privilege has been disabled. Contact your system administrator."), // STATUS_CTX_LOGON_DISABLED
	StatusRecord::new(0xC00A_0038, 7060, 0, "The terminal server security layer detected an error in the protocol stream and has disconnected the client."), // STATUS_CTX_SECURITY_LAYER_ERROR
	StatusRecord::new(0xC00A_0039, 7069, 0, "The target session is incompatible with the current session."), // STATUS_TS_INCOMPATIBLE_SESSIONS
	StatusRecord::new(0xC00A_003A, 7070, 0, "Windows can't connect to your session because a problem occurred in the Windows video subsystem. Try connecting again later, or contact the server administrator for assistance."), // STATUS_TS_VIDEO_SUBSYSTEM_ERROR

	StatusRecord::new(0xC013_0001, 5039, 0, "The cluster node is not valid."), // STATUS_CLUSTER_INVALID_NODE
	StatusRecord::new(0xC013_0002, 5040, 0, "The cluster node already exists."), // STATUS_CLUSTER_NODE_EXISTS
	StatusRecord::new(0xC013_0003, 5041, 0, "A node is in the process of joining the cluster."), // STATUS_CLUSTER_JOIN_IN_PROGRESS
	StatusRecord::new(0xC013_0004, 5042, 0, "The cluster node was not found."), // STATUS_CLUSTER_NODE_NOT_FOUND
	StatusRecord::new(0xC013_0005, 5043, 0, "The cluster local node information was not found."), // STATUS_CLUSTER_LOCAL_NODE_NOT_FOUND
	StatusRecord::new(0xC013_0006, 5044, 0, "The cluster network already exists."), // STATUS_CLUSTER_NETWORK_EXISTS
	StatusRecord::new(0xC013_0007, 5045, 0, "The cluster network was not found."), // STATUS_CLUSTER_NETWORK_NOT_FOUND
	StatusRecord::new(0xC013_0008, 5046, 0, "The cluster network interface already exists."), // STATUS_CLUSTER_NETINTERFACE_EXISTS
	StatusRecord::new(0xC013_0009, 5047, 0, "The cluster network interface was not found."), // STATUS_CLUSTER_NETINTERFACE_NOT_FOUND
	StatusRecord::new(0xC013_000A, 5048, 0, "The cluster request is not valid for this object."), // STATUS_CLUSTER_INVALID_REQUEST
	StatusRecord::new(0xC013_000B, 5049, 0, "The cluster network provider is not valid."), // STATUS_CLUSTER_INVALID_NETWORK_PROVIDER
	StatusRecord::new(0xC013_000C, 5050, 0, "The cluster node is down."), // STATUS_CLUSTER_NODE_DOWN
	StatusRecord::new(0xC013_000D, 5051, 0, "The cluster node is not reachable."), // STATUS_CLUSTER_NODE_UNREACHABLE
	StatusRecord::new(0xC013_000E, 5052, 0, "The cluster node is not a member of the cluster."), // STATUS_CLUSTER_NODE_NOT_MEMBER
	StatusRecord::new(0xC013_000F, 5053, 0, "A cluster join operation is not in progress."), // STATUS_CLUSTER_JOIN_NOT_IN_PROGRESS
	StatusRecord::new(0xC013_0010, 5054, 0, "The cluster network is not valid."), // STATUS_CLUSTER_INVALID_NETWORK
	StatusRecord::new(0xC013_0011, 5055, 0, "No network adapters are available."), // STATUS_CLUSTER_NO_NET_ADAPTERS
	StatusRecord::new(0xC013_0012, 5056, 0, "The cluster node is up."), // STATUS_CLUSTER_NODE_UP
	StatusRecord::new(0xC013_0013, 5070, 0, "The cluster node has been paused."), // STATUS_CLUSTER_NODE_PAUSED
	StatusRecord::new(0xC013_0014, 5071, 0, "The cluster node is not paused."), // STATUS_CLUSTER_NODE_NOT_PAUSED
	StatusRecord::new(0xC013_0015, 5072, 0, "No cluster security context is available."), // STATUS_CLUSTER_NO_SECURITY_CONTEXT
	StatusRecord::new(0xC013_0016, 5073, 0, "The cluster network is not configured for internal cluster communication."), // STATUS_CLUSTER_NETWORK_NOT_INTERNAL
	StatusRecord::new(0xC013_0017, 5087, 0, "The cluster node has been poisoned."), // STATUS_CLUSTER_POISONED
	StatusRecord::new(0xC013_0018, 5946, 0, "The path does not belong to a cluster shared volume."), // STATUS_CLUSTER_NON_CSV_PATH
	StatusRecord::new(0xC013_0019, 5947, 0, "The cluster volume is not locally mounted on this node."), // STATUS_CLUSTER_CSV_VOLUME_NOT_LOCAL
	StatusRecord::new(0xC013_0020, 5960, 0, "The operation has failed because CSV volume was not able to recover in time specified on this file object."), // STATUS_CLUSTER_CSV_READ_OPLOCK_BREAK_IN_PROGRESS
	StatusRecord::new(0xC013_0021, 5961, 0, "The operation failed because the CSV volume is in redirected mode."), // STATUS_CLUSTER_CSV_AUTO_PAUSE_ERROR
	StatusRecord::new(0xC013_0022, 5962, 0, "The operation failed because the CSV volume is redirected."), // STATUS_CLUSTER_CSV_REDIRECTED
	StatusRecord::new(0xC013_0023, 5963, 0, "The operation failed because the CSV volume is not redirected."), // STATUS_CLUSTER_CSV_NOT_REDIRECTED
	StatusRecord::new(0xC013_0024, 5964, 0, "The operation failed because the CSV volume is draining."), // STATUS_CLUSTER_CSV_VOLUME_DRAINING
	StatusRecord::new(0xC013_0025, 5965, 0, "The operation failed because a snapshot is being created on the CSV volume."), // STATUS_CLUSTER_CSV_SNAPSHOT_CREATION_IN_PROGRESS
	StatusRecord::new(0xC013_0026, 5966, 0, "The CSV volume drain completed on a down-level node."), // STATUS_CLUSTER_CSV_VOLUME_DRAINING_SUCCEEDED_DOWNLEVEL
	StatusRecord::new(0xC013_0027, 5967, 0, "The CSV volume does not have any snapshots."), // STATUS_CLUSTER_CSV_NO_SNAPSHOTS
	StatusRecord::new(0xC013_0028, 5968, 0, "The CSV I/O pause timed out."), // STATUS_CSV_IO_PAUSE_TIMEOUT
	StatusRecord::new(0xC013_0029, 5969, 0, "The CSV handle is not valid."), // STATUS_CLUSTER_CSV_INVALID_HANDLE
	StatusRecord::new(0xC013_0030, 5970, 0, "This operation is supported only on the CSV coordinator node."), // STATUS_CLUSTER_CSV_SUPPORTED_ONLY_ON_COORDINATOR
	StatusRecord::new(0xC013_0031, 5971, 0, "The cluster authentication ticket was replayed."), // STATUS_CLUSTER_CAM_TICKET_REPLAY_DETECTED

	StatusRecord::new(0xC015_0001, 14000, 0, "The requested section is not present in the activation context."), // STATUS_SXS_SECTION_NOT_FOUND
	StatusRecord::new(0xC015_0002, 14001, 0, "Windows was not able to process the application binding information.\nPlease refer to your System Event Log for further information."), // STATUS_SXS_CANT_GEN_ACTCTX
	StatusRecord::new(0xC015_0003, 14002, 0, "The application binding data format is invalid."), // STATUS_SXS_INVALID_ACTCTXDATA_FORMAT
	StatusRecord::new(0xC015_0004, 14003, 0, "The referenced assembly is not installed on your system."), // STATUS_SXS_ASSEMBLY_NOT_FOUND
	StatusRecord::new(0xC015_0005, 14004, 0, "The manifest file does not begin with the required tag and format information."), // STATUS_SXS_MANIFEST_FORMAT_ERROR
	StatusRecord::new(0xC015_0006, 14005, 0, "The manifest file contains one or more syntax errors."), // STATUS_SXS_MANIFEST_PARSE_ERROR
	StatusRecord::new(0xC015_0007, 14006, 0, "The application attempted to activate a disabled activation context."), // STATUS_SXS_ACTIVATION_CONTEXT_DISABLED
	StatusRecord::new(0xC015_0008, 14007, 0, "The requested lookup key was not found in any active activation context."), // STATUS_SXS_KEY_NOT_FOUND
	StatusRecord::new(0xC015_0009, 14008, 0, "A component version required by the application conflicts with another component version already active."), // STATUS_SXS_VERSION_CONFLICT
	StatusRecord::new(0xC015_000A, 14009, 0, "The type requested activation context section does not match the query API used."), // STATUS_SXS_WRONG_SECTION_TYPE
	StatusRecord::new(0xC015_000B, 14010, 0, "Lack of system resources has required isolated activation to be disabled for the current thread of execution."), // STATUS_SXS_THREAD_QUERIES_DISABLED

	StatusRecord::new(0xC019_0001, 6800, 0, "The function attempted to use a name that is reserved for use by another transaction."), // STATUS_TRANSACTIONAL_CONFLICT
	StatusRecord::new(0xC019_0002, 6700, 0, "The transaction handle associated with this operation is not valid."), // STATUS_INVALID_TRANSACTION
	StatusRecord::new(0xC019_0003, 6701, 0, "The requested operation was made in the context of a transaction that is no longer active."), // STATUS_TRANSACTION_NOT_ACTIVE
	StatusRecord::new(0xC019_0004, 6706, 0, "The Transaction Manager was unable to be successfully initialized. Transacted operations are not supported."), // STATUS_TM_INITIALIZATION_FAILED
	StatusRecord::new(0xC019_0005, 6801, 0, "Transaction support within the specified resource manager is not started or was shut down due to an error."), // STATUS_RM_NOT_ACTIVE
	StatusRecord::new(0xC019_0006, 6802, 0, "The metadata of the RM has been corrupted. The RM will not function."), // STATUS_RM_METADATA_CORRUPT
	StatusRecord::new(0xC019_0007, 6708, 0, "The resource manager has attempted to prepare a transaction that it has not successfully joined."), // STATUS_TRANSACTION_NOT_JOINED
	StatusRecord::new(0xC019_0008, 6803, 0, "The specified directory does not contain a resource manager."), // STATUS_DIRECTORY_NOT_RM

	StatusRecord::new(0xC01A_0001, 6601, 0, "Log service found an invalid log sector."), // STATUS_LOG_SECTOR_INVALID
	StatusRecord::new(0xC01A_0002, 6602, 0, "Log service encountered a log sector with invalid block parity."), // STATUS_LOG_SECTOR_PARITY_INVALID
	StatusRecord::new(0xC01A_0003, 6603, 0, "Log service encountered a remapped log sector."), // STATUS_LOG_SECTOR_REMAPPED
	StatusRecord::new(0xC01A_0004, 6604, 0, "Log service encountered a partial or incomplete log block."), // STATUS_LOG_BLOCK_INCOMPLETE
	StatusRecord::new(0xC01A_0005, 6605, 0, "Log service encountered an attempt to access data outside the active log range."), // STATUS_LOG_INVALID_RANGE
	StatusRecord::new(0xC01A_0006, 6606, 0, "Log service user-log marshaling buffers are exhausted."), // STATUS_LOG_BLOCKS_EXHAUSTED
	StatusRecord::new(0xC01A_0007, 6607, 0, "Log service encountered an attempt to read from a marshaling area with an invalid read context."), // STATUS_LOG_READ_CONTEXT_INVALID
	StatusRecord::new(0xC01A_0008, 6608, 0, "Log service encountered an invalid log restart area."), // STATUS_LOG_RESTART_INVALID
	StatusRecord::new(0xC01A_0009, 6609, 0, "Log service encountered an invalid log block version."), // STATUS_LOG_BLOCK_VERSION
	StatusRecord::new(0xC01A_000A, 6610, 0, "Log service encountered an invalid log block."), // STATUS_LOG_BLOCK_INVALID
	StatusRecord::new(0xC01A_000B, 6611, 0, "Log service encountered an attempt to read the log with an invalid read mode."), // STATUS_LOG_READ_MODE_INVALID
	StatusRecord::new(0xC01A_000D, 6613, 0, "Log service encountered a corrupted metadata file."), // STATUS_LOG_METADATA_CORRUPT
	StatusRecord::new(0xC01A_000E, 6614, 0, "Log service encountered a metadata file that could not be created by the log file system."), // STATUS_LOG_METADATA_INVALID
	StatusRecord::new(0xC01A_000F, 6615, 0, "Log service encountered a metadata file with inconsistent data."), // STATUS_LOG_METADATA_INCONSISTENT
	StatusRecord::new(0xC01A_0010, 6616, 0, "Log service encountered an attempt to erroneously allocate or dispose reservation space."), // STATUS_LOG_RESERVATION_INVALID
	StatusRecord::new(0xC01A_0011, 6617, 0, "Log service cannot delete the log file or the file system container."), // STATUS_LOG_CANT_DELETE
	StatusRecord::new(0xC01A_0012, 6618, 0, "Log service has reached the maximum allowable containers allocated to a log file."), // STATUS_LOG_CONTAINER_LIMIT_EXCEEDED
	StatusRecord::new(0xC01A_0013, 6619, 0, "Log service has attempted to read or write backward past the start of the log."), // STATUS_LOG_START_OF_LOG
	StatusRecord::new(0xC01A_0014, 6620, 0, "Log policy could not be installed because a policy of the same type is already present."), // STATUS_LOG_POLICY_ALREADY_INSTALLED
	StatusRecord::new(0xC01A_0015, 6621, 0, "Log policy in question was not installed at the time of the request."), // STATUS_LOG_POLICY_NOT_INSTALLED
	StatusRecord::new(0xC01A_0016, 6622, 0, "The installed set of policies on the log is invalid."), // STATUS_LOG_POLICY_INVALID
	StatusRecord::new(0xC01A_0017, 6623, 0, "A policy on the log in question prevented the operation from completing."), // STATUS_LOG_POLICY_CONFLICT
	StatusRecord::new(0xC01A_0018, 6624, 0, "The log space cannot be reclaimed because the log is pinned by the archive tail."), // STATUS_LOG_PINNED_ARCHIVE_TAIL
	StatusRecord::new(0xC01A_0019, 6625, 0, "The log record is not a record in the log file."), // STATUS_LOG_RECORD_NONEXISTENT
	StatusRecord::new(0xC01A_001A, 6626, 0, "The number of reserved log records or the adjustment of the number of reserved log records is invalid."), // STATUS_LOG_RECORDS_RESERVED_INVALID
	StatusRecord::new(0xC01A_001B, 6627, 0, "The reserved log space or the adjustment of the log space is invalid."), // STATUS_LOG_SPACE_RESERVED_INVALID
	StatusRecord::new(0xC01A_001C, 6628, 0, "A new or existing archive tail or the base of the active log is invalid."), // STATUS_LOG_TAIL_INVALID
	StatusRecord::new(0xC01A_001D, 6629, 0, "The log space is exhausted."), // STATUS_LOG_FULL
	StatusRecord::new(0xC01A_001E, 6630, 0, "The log is multiplexed; no direct writes to the physical log are allowed."), // STATUS_LOG_MULTIPLEXED
	StatusRecord::new(0xC01A_001F, 6631, 0, "The operation failed because the log is dedicated."), // STATUS_LOG_DEDICATED
	StatusRecord::new(0xC01A_0020, 6632, 0, "The operation requires an archive context."), // STATUS_LOG_ARCHIVE_NOT_IN_PROGRESS
	StatusRecord::new(0xC01A_0021, 6633, 0, "Log archival is in progress."), // STATUS_LOG_ARCHIVE_IN_PROGRESS
	StatusRecord::new(0xC01A_0022, 6634, 0, "The operation requires a nonephemeral log, but the log is ephemeral."), // STATUS_LOG_EPHEMERAL
	StatusRecord::new(0xC01A_0023, 6635, 0, "The log must have at least two containers before it can be read from or written to."), // STATUS_LOG_NOT_ENOUGH_CONTAINERS
	StatusRecord::new(0xC01A_0024, 6636, 0, "A log client has already registered on the stream."), // STATUS_LOG_CLIENT_ALREADY_REGISTERED
	StatusRecord::new(0xC01A_0025, 6637, 0, "A log client has not been registered on the stream."), // STATUS_LOG_CLIENT_NOT_REGISTERED
	StatusRecord::new(0xC01A_0026, 6638, 0, "A request has already been made to handle the log full condition."), // STATUS_LOG_FULL_HANDLER_IN_PROGRESS
	StatusRecord::new(0xC01A_0027, 6639, 0, "Log service encountered an error when attempting to read from a log container."), // STATUS_LOG_CONTAINER_READ_FAILED
	StatusRecord::new(0xC01A_0028, 6640, 0, "Log service encountered an error when attempting to write to a log container."), // STATUS_LOG_CONTAINER_WRITE_FAILED
	StatusRecord::new(0xC01A_0029, 6641, 0, "Log service encountered an error when attempting to open a log container."), // STATUS_LOG_CONTAINER_OPEN_FAILED
	StatusRecord::new(0xC01A_002A, 6642, 0, "Log service encountered an invalid container state when attempting a requested action."), // STATUS_LOG_CONTAINER_STATE_INVALID
	StatusRecord::new(0xC01A_002B, 6643, 0, "Log service is not in the correct state to perform a requested action."), // STATUS_LOG_STATE_INVALID
	StatusRecord::new(0xC01A_002C, 6644, 0, "The log space cannot be reclaimed because the log is pinned."), // STATUS_LOG_PINNED
	StatusRecord::new(0xC01A_002D, 6645, 0, "The log metadata flush failed."), // STATUS_LOG_METADATA_FLUSH_FAILED
	StatusRecord::new(0xC01A_002E, 6646, 0, "Security on the log and its containers is inconsistent."), // STATUS_LOG_INCONSISTENT_SECURITY
	StatusRecord::new(0xC01A_002F, 6647, 0, "Records were appended to the log or reservation changes were made, but the log could not be flushed."), // STATUS_LOG_APPENDED_FLUSH_FAILED
	StatusRecord::new(0xC01A_0030, 6648, 0, "The log is pinned due to reservation consuming most of the log space. Free some reserved records to make space available."), // STATUS_LOG_PINNED_RESERVATION

	StatusRecord::new(0xC01C_0001, 0x801F_0001, 0, "A handler was not defined by the filter for this operation."), // STATUS_FLT_NO_HANDLER_DEFINED
	StatusRecord::new(0xC01C_0002, 0x801F_0002, 0, "A context is already defined for this object."), // STATUS_FLT_CONTEXT_ALREADY_DEFINED
	StatusRecord::new(0xC01C_0003, 0x801F_0003, 0, "Asynchronous requests are not valid for this operation."), // STATUS_FLT_INVALID_ASYNCHRONOUS_REQUEST
	StatusRecord::new(0xC01C_0004, 0x801F_0004, 0, "This is an internal error code used by the filter manager to determine if a fast I/O operation should be forced down the input/output request packet (IRP) path. Minifilters should never return this value."), // STATUS_FLT_DISALLOW_FAST_IO
	StatusRecord::new(0xC01C_0005, 0x801F_0005, 0, "An invalid name request was made. The name requested cannot be retrieved at this time."), // STATUS_FLT_INVALID_NAME_REQUEST
	StatusRecord::new(0xC01C_0006, 0x801F_0006, 0, "Posting this operation to a worker thread for further processing is not safe at this time because it could lead to a system deadlock."), // STATUS_FLT_NOT_SAFE_TO_POST_OPERATION
	StatusRecord::new(0xC01C_0007, 0x801F_0007, 0, "The Filter Manager was not initialized when a filter tried to register. Make sure that the Filter Manager is loaded as a driver."), // STATUS_FLT_NOT_INITIALIZED
	StatusRecord::new(0xC01C_0008, 0x801F_0008, 0, "The filter is not ready for attachment to volumes because it has not finished initializing (FltStartFiltering has not been called)."), // STATUS_FLT_FILTER_NOT_READY
	StatusRecord::new(0xC01C_0009, 0x801F_0009, 0, "The filter must clean up any operation-specific context at this time because it is being removed from the system before the operation is completed by the lower drivers."), // STATUS_FLT_POST_OPERATION_CLEANUP
	StatusRecord::new(0xC01C_000A, 0x801F_000A, 0, "The Filter Manager had an internal error from which it cannot recover; therefore, the operation has failed. This is usually the result of a filter returning an invalid value from a pre-operation callback."), // STATUS_FLT_INTERNAL_ERROR
	StatusRecord::new(0xC01C_000B, 0x801F_000B, 0, "The object specified for this action is in the process of being deleted; therefore, the action requested cannot be completed at this time."), // STATUS_FLT_DELETING_OBJECT
	StatusRecord::new(0xC01C_000C, 0x801F_000C, 0, "A nonpaged pool must be used for this type of context."), // STATUS_FLT_MUST_BE_NONPAGED_POOL
	StatusRecord::new(0xC01C_000D, 0x801F_000D, 0, "A duplicate handler definition has been provided for an operation."), // STATUS_FLT_DUPLICATE_ENTRY
	StatusRecord::new(0xC01C_000E, 0x801F_000E, 0, "The callback data queue has been disabled."), // STATUS_FLT_CBDQ_DISABLED
	StatusRecord::new(0xC01C_000F, 0x801F_000F, 0, "Do not attach the filter to the volume at this time."), // STATUS_FLT_DO_NOT_ATTACH
	StatusRecord::new(0xC01C_0010, 0x801F_0010, 0, "Do not detach the filter from the volume at this time."), // STATUS_FLT_DO_NOT_DETACH
	StatusRecord::new(0xC01C_0011, 0x801F_0011, 0, "An instance already exists at this altitude on the volume specified."), // STATUS_FLT_INSTANCE_ALTITUDE_COLLISION
	StatusRecord::new(0xC01C_0012, 0x801F_0012, 0, "An instance already exists with this name on the volume specified."), // STATUS_FLT_INSTANCE_NAME_COLLISION
	StatusRecord::new(0xC01C_0013, 0x801F_0013, 0, "The system could not find the filter specified."), // STATUS_FLT_FILTER_NOT_FOUND
	StatusRecord::new(0xC01C_0014, 0x801F_0014, 0, "The system could not find the volume specified."), // STATUS_FLT_VOLUME_NOT_FOUND
	StatusRecord::new(0xC01C_0015, 0x801F_0015, 0, "The system could not find the instance specified."), // STATUS_FLT_INSTANCE_NOT_FOUND
	StatusRecord::new(0xC01C_0016, 0x801F_0016, 0, "No registered context allocation definition was found for the given request."), // STATUS_FLT_CONTEXT_ALLOCATION_NOT_FOUND
	StatusRecord::new(0xC01C_0017, 0x801F_0017, 0, "An invalid parameter was specified during context registration."), // STATUS_FLT_INVALID_CONTEXT_REGISTRATION
	StatusRecord::new(0xC01C_0018, 0x801F_0018, 0, "The name requested was not found in the Filter Manager name cache and could not be retrieved from the file system."), // STATUS_FLT_NAME_CACHE_MISS
	StatusRecord::new(0xC01C_0019, 0x801F_0019, 0, "The requested device object does not exist for the given volume."), // STATUS_FLT_NO_DEVICE_OBJECT
	StatusRecord::new(0xC01C_001A, 0x801F_001A, 0, "The specified volume is already mounted."), // STATUS_FLT_VOLUME_ALREADY_MOUNTED
	StatusRecord::new(0xC01C_001B, 0x801F_001B, 0, "The specified transaction context is already enlisted in a transaction."), // STATUS_FLT_ALREADY_ENLISTED
	StatusRecord::new(0xC01C_001C, 0x801F_001C, 0, "The specified context is already attached to another object."), // STATUS_FLT_CONTEXT_ALREADY_LINKED
	StatusRecord::new(0xC01C_0020, 0x801F_0020, 0, "No waiter is present for the filter's reply to this message."), // STATUS_FLT_NO_WAITER_FOR_REPLY
	StatusRecord::new(0xC01C_0023, 0x801F_0023, 0, "The filesystem database resource is in use. Registration cannot complete at this time."), // STATUS_FLT_REGISTRATION_BUSY
	StatusRecord::new(0xC01C_0024, 0x801F_0024, 0, "The filter is not allowed to load on this system."), // STATUS_FLT_WCOS_NOT_SUPPORTED

	StatusRecord::new(0xC01E_0000, 0xC026_2000, 0, "Exclusive mode ownership is needed to create an unmanaged primary allocation."), // STATUS_GRAPHICS_NOT_EXCLUSIVE_MODE_OWNER
	StatusRecord::new(0xC01E_0001, 0xC026_2001, 0, "The driver needs more DMA buffer space to complete the requested operation."), // STATUS_GRAPHICS_INSUFFICIENT_DMA_BUFFER
	StatusRecord::new(0xC01E_0002, 0xC026_2002, 0, "The specified display adapter handle is invalid."), // STATUS_GRAPHICS_INVALID_DISPLAY_ADAPTER
	StatusRecord::new(0xC01E_0003, 0xC026_2003, 0, "The specified display adapter and all of its state have been reset."), // STATUS_GRAPHICS_ADAPTER_WAS_RESET
	StatusRecord::new(0xC01E_0004, 0xC026_2004, 0, "The driver stack does not match the expected driver model."), // STATUS_GRAPHICS_INVALID_DRIVER_MODEL
	StatusRecord::new(0xC01E_0005, 0xC026_2005, 0, "The desktop mode changed."), // STATUS_GRAPHICS_PRESENT_MODE_CHANGED
	StatusRecord::new(0xC01E_0006, 0xC026_2006, 0, "The present was occluded."), // STATUS_GRAPHICS_PRESENT_OCCLUDED
	StatusRecord::new(0xC01E_0007, 0xC026_2007, 0, "The present was denied."), // STATUS_GRAPHICS_PRESENT_DENIED
	StatusRecord::new(0xC01E_0008, 0xC026_2008, 0, "The GPU cannot color convert."), // STATUS_GRAPHICS_CANNOTCOLORCONVERT
	StatusRecord::new(0xC01E_0009, 0xC026_2009, 0, "The kernel driver detected a version mismatch between it and the user mode driver."), // STATUS_GRAPHICS_DRIVER_MISMATCH
	StatusRecord::new(0xC01E_000B, 0xC026_200B, 0, "Present redirection is disabled (desktop windowing management subsystem is off)."), // STATUS_GRAPHICS_PRESENT_REDIRECTION_DISABLED
	StatusRecord::new(0xC01E_000C, 0xC026_200C, 0, "Previous exclusive VidPn source owner has released its ownership."), // STATUS_GRAPHICS_PRESENT_UNOCCLUDED
	StatusRecord::new(0xC01E_000D, 0xC026_200D, 0, "Window DC is not available for presentation."), // STATUS_GRAPHICS_WINDOWDC_NOT_AVAILABLE
	StatusRecord::new(0xC01E_000E, 0xC026_200E, 0, "Windowless present is disabled."), // STATUS_GRAPHICS_WINDOWLESS_PRESENT_DISABLED
	StatusRecord::new(0xC01E_000F, 0xC026_200F, 0, "The window is not valid for presentation."), // STATUS_GRAPHICS_PRESENT_INVALID_WINDOW
	StatusRecord::new(0xC01E_0010, 0xC026_2010, 0, "The present buffer is not bound to the swap chain."), // STATUS_GRAPHICS_PRESENT_BUFFER_NOT_BOUND
	StatusRecord::new(0xC01E_0011, 0xC026_2011, 0, "The VAIL state changed."), // STATUS_GRAPHICS_VAIL_STATE_CHANGED
	StatusRecord::new(0xC01E_0012, 0xC026_2012, 0, "The indirect display device abandoned the swap chain."), // STATUS_GRAPHICS_INDIRECT_DISPLAY_ABANDON_SWAPCHAIN
	StatusRecord::new(0xC01E_0013, 0xC026_2013, 0, "The indirect display device was stopped."), // STATUS_GRAPHICS_INDIRECT_DISPLAY_DEVICE_STOPPED
	StatusRecord::new(0xC01E_0100, 0xC026_2100, 0, "Not enough video memory is available to complete the operation."), // STATUS_GRAPHICS_NO_VIDEO_MEMORY
	StatusRecord::new(0xC01E_0101, 0xC026_2101, 0, "Could not probe and lock the underlying memory of an allocation."), // STATUS_GRAPHICS_CANT_LOCK_MEMORY
	StatusRecord::new(0xC01E_0102, 0xC026_2102, 0, "The allocation is currently busy."), // STATUS_GRAPHICS_ALLOCATION_BUSY
	StatusRecord::new(0xC01E_0103, 0xC026_2103, 0, "An object being referenced has already reached the maximum reference count and cannot be referenced further."), // STATUS_GRAPHICS_TOO_MANY_REFERENCES
	StatusRecord::new(0xC01E_0104, 0xC026_2104, 0, "A problem could not be solved due to an existing condition. Try again later."), // STATUS_GRAPHICS_TRY_AGAIN_LATER
	StatusRecord::new(0xC01E_0105, 0xC026_2105, 0, "A problem could not be solved due to an existing condition. Try again now."), // STATUS_GRAPHICS_TRY_AGAIN_NOW
	StatusRecord::new(0xC01E_0106, 0xC026_2106, 0, "The allocation is invalid."), // STATUS_GRAPHICS_ALLOCATION_INVALID
	StatusRecord::new(0xC01E_0107, 0xC026_2107, 0, "No more unswizzling apertures are currently available."), // STATUS_GRAPHICS_UNSWIZZLING_APERTURE_UNAVAILABLE
	StatusRecord::new(0xC01E_0108, 0xC026_2108, 0, "The current allocation cannot be unswizzled by an aperture."), // STATUS_GRAPHICS_UNSWIZZLING_APERTURE_UNSUPPORTED
	StatusRecord::new(0xC01E_0109, 0xC026_2109, 0, "The request failed because a pinned allocation cannot be evicted."), // STATUS_GRAPHICS_CANT_EVICT_PINNED_ALLOCATION
	StatusRecord::new(0xC01E_0110, 0xC026_2110, 0, "The allocation cannot be used from its current segment location for the specified operation."), // STATUS_GRAPHICS_INVALID_ALLOCATION_USAGE
	StatusRecord::new(0xC01E_0111, 0xC026_2111, 0, "A locked allocation cannot be used in the current command buffer."), // STATUS_GRAPHICS_CANT_RENDER_LOCKED_ALLOCATION
	StatusRecord::new(0xC01E_0112, 0xC026_2112, 0, "The allocation being referenced has been closed permanently."), // STATUS_GRAPHICS_ALLOCATION_CLOSED
	StatusRecord::new(0xC01E_0113, 0xC026_2113, 0, "An invalid allocation instance is being referenced."), // STATUS_GRAPHICS_INVALID_ALLOCATION_INSTANCE
	StatusRecord::new(0xC01E_0114, 0xC026_2114, 0, "An invalid allocation handle is being referenced."), // STATUS_GRAPHICS_INVALID_ALLOCATION_HANDLE
	StatusRecord::new(0xC01E_0115, 0xC026_2115, 0, "The allocation being referenced does not belong to the current device."), // STATUS_GRAPHICS_WRONG_ALLOCATION_DEVICE
	StatusRecord::new(0xC01E_0116, 0xC026_2116, 0, "The specified allocation lost its content."), // STATUS_GRAPHICS_ALLOCATION_CONTENT_LOST
	StatusRecord::new(0xC01E_0200, 0xC026_2200, 0, "A GPU exception was detected on the given device. The device cannot be scheduled."), // STATUS_GRAPHICS_GPU_EXCEPTION_ON_DEVICE
	StatusRecord::new(0xC01E_0300, 0xC026_2300, 0, "The specified VidPN topology is invalid."), // STATUS_GRAPHICS_INVALID_VIDPN_TOPOLOGY
	StatusRecord::new(0xC01E_0301, 0xC026_2301, 0, "The specified VidPN topology is valid but is not supported by this model of the display adapter."), // STATUS_GRAPHICS_VIDPN_TOPOLOGY_NOT_SUPPORTED
	StatusRecord::new(0xC01E_0302, 0xC026_2302, 0, "The specified VidPN topology is valid but is not currently supported by the display adapter due to allocation of its resources."), // STATUS_GRAPHICS_VIDPN_TOPOLOGY_CURRENTLY_NOT_SUPPORTED
	StatusRecord::new(0xC01E_0303, 0xC026_2303, 0, "The specified VidPN handle is invalid."), // STATUS_GRAPHICS_INVALID_VIDPN
	StatusRecord::new(0xC01E_0304, 0xC026_2304, 0, "The specified video present source is invalid."), // STATUS_GRAPHICS_INVALID_VIDEO_PRESENT_SOURCE
	StatusRecord::new(0xC01E_0305, 0xC026_2305, 0, "The specified video present target is invalid."), // STATUS_GRAPHICS_INVALID_VIDEO_PRESENT_TARGET
	StatusRecord::new(0xC01E_0306, 0xC026_2306, 0, "The specified VidPN modality is not supported (for example, at least two of the pinned modes are not co-functional)."), // STATUS_GRAPHICS_VIDPN_MODALITY_NOT_SUPPORTED
	StatusRecord::new(0xC01E_0308, 0xC026_2308, 0, "The specified VidPN source mode set is invalid."), // STATUS_GRAPHICS_INVALID_VIDPN_SOURCEMODESET
	StatusRecord::new(0xC01E_0309, 0xC026_2309, 0, "The specified VidPN target mode set is invalid."), // STATUS_GRAPHICS_INVALID_VIDPN_TARGETMODESET
	StatusRecord::new(0xC01E_030A, 0xC026_230A, 0, "The specified video signal frequency is invalid."), // STATUS_GRAPHICS_INVALID_FREQUENCY
	StatusRecord::new(0xC01E_030B, 0xC026_230B, 0, "The specified video signal active region is invalid."), // STATUS_GRAPHICS_INVALID_ACTIVE_REGION
	StatusRecord::new(0xC01E_030C, 0xC026_230C, 0, "The specified video signal total region is invalid."), // STATUS_GRAPHICS_INVALID_TOTAL_REGION
	StatusRecord::new(0xC01E_0310, 0xC026_2310, 0, "The specified video present source mode is invalid."), // STATUS_GRAPHICS_INVALID_VIDEO_PRESENT_SOURCE_MODE
	StatusRecord::new(0xC01E_0311, 0xC026_2311, 0, "The specified video present target mode is invalid."), // STATUS_GRAPHICS_INVALID_VIDEO_PRESENT_TARGET_MODE
	StatusRecord::new(0xC01E_0312, 0xC026_2312, 0, "The pinned mode must remain in the set on the VidPN's co-functional modality enumeration."), // STATUS_GRAPHICS_PINNED_MODE_MUST_REMAIN_IN_SET
	StatusRecord::new(0xC01E_0313, 0xC026_2313, 0, "The specified video present path is already in the VidPN's topology."), // STATUS_GRAPHICS_PATH_ALREADY_IN_TOPOLOGY
	StatusRecord::new(0xC01E_0314, 0xC026_2314, 0, "The specified mode is already in the mode set."), // STATUS_GRAPHICS_MODE_ALREADY_IN_MODESET
	StatusRecord::new(0xC01E_0315, 0xC026_2315, 0, "The specified video present source set is invalid."), // STATUS_GRAPHICS_INVALID_VIDEOPRESENTSOURCESET
	StatusRecord::new(0xC01E_0316, 0xC026_2316, 0, "The specified video present target set is invalid."), // STATUS_GRAPHICS_INVALID_VIDEOPRESENTTARGETSET
	StatusRecord::new(0xC01E_0317, 0xC026_2317, 0, "The specified video present source is already in the video present source set."), // STATUS_GRAPHICS_SOURCE_ALREADY_IN_SET
	StatusRecord::new(0xC01E_0318, 0xC026_2318, 0, "The specified video present target is already in the video present target set."), // STATUS_GRAPHICS_TARGET_ALREADY_IN_SET
	StatusRecord::new(0xC01E_0319, 0xC026_2319, 0, "The specified VidPN present path is invalid."), // STATUS_GRAPHICS_INVALID_VIDPN_PRESENT_PATH
	StatusRecord::new(0xC01E_031A, 0xC026_231A, 0, "The miniport has no recommendation for augmenting the specified VidPN's topology."), // STATUS_GRAPHICS_NO_RECOMMENDED_VIDPN_TOPOLOGY
	StatusRecord::new(0xC01E_031B, 0xC026_231B, 0, "The specified monitor frequency range set is invalid."), // STATUS_GRAPHICS_INVALID_MONITOR_FREQUENCYRANGESET
	StatusRecord::new(0xC01E_031C, 0xC026_231C, 0, "The specified monitor frequency range is invalid."), // STATUS_GRAPHICS_INVALID_MONITOR_FREQUENCYRANGE
	StatusRecord::new(0xC01E_031D, 0xC026_231D, 0, "The specified frequency range is not in the specified monitor frequency range set."), // STATUS_GRAPHICS_FREQUENCYRANGE_NOT_IN_SET
	StatusRecord::new(0xC01E_031F, 0xC026_231F, 0, "The specified frequency range is already in the specified monitor frequency range set."), // STATUS_GRAPHICS_FREQUENCYRANGE_ALREADY_IN_SET
	StatusRecord::new(0xC01E_0320, 0xC026_2320, 0, "The specified mode set is stale. Reacquire the new mode set."), // STATUS_GRAPHICS_STALE_MODESET
	StatusRecord::new(0xC01E_0321, 0xC026_2321, 0, "The specified monitor source mode set is invalid."), // STATUS_GRAPHICS_INVALID_MONITOR_SOURCEMODESET
	StatusRecord::new(0xC01E_0322, 0xC026_2322, 0, "The specified monitor source mode is invalid."), // STATUS_GRAPHICS_INVALID_MONITOR_SOURCE_MODE
	StatusRecord::new(0xC01E_0323, 0xC026_2323, 0, "The miniport does not have a recommendation regarding the request to provide a functional VidPN given the current display adapter configuration."), // STATUS_GRAPHICS_NO_RECOMMENDED_FUNCTIONAL_VIDPN
	StatusRecord::new(0xC01E_0324, 0xC026_2324, 0, "The ID of the specified mode is being used by another mode in the set."), // STATUS_GRAPHICS_MODE_ID_MUST_BE_UNIQUE
	StatusRecord::new(0xC01E_0325, 0xC026_2325, 0, "The system failed to determine a mode that is supported by both the display adapter and the monitor connected to it."), // STATUS_GRAPHICS_EMPTY_ADAPTER_MONITOR_MODE_SUPPORT_INTERSECTION
	StatusRecord::new(0xC01E_0326, 0xC026_2326, 0, "The number of video present targets must be greater than or equal to the number of video present sources."), // STATUS_GRAPHICS_VIDEO_PRESENT_TARGETS_LESS_THAN_SOURCES
	StatusRecord::new(0xC01E_0327, 0xC026_2327, 0, "The specified present path is not in the VidPN's topology."), // STATUS_GRAPHICS_PATH_NOT_IN_TOPOLOGY
	StatusRecord::new(0xC01E_0328, 0xC026_2328, 0, "The display adapter must have at least one video present source."), // STATUS_GRAPHICS_ADAPTER_MUST_HAVE_AT_LEAST_ONE_SOURCE
	StatusRecord::new(0xC01E_0329, 0xC026_2329, 0, "The display adapter must have at least one video present target."), // STATUS_GRAPHICS_ADAPTER_MUST_HAVE_AT_LEAST_ONE_TARGET
	StatusRecord::new(0xC01E_032A, 0xC026_232A, 0, "The specified monitor descriptor set is invalid."), // STATUS_GRAPHICS_INVALID_MONITORDESCRIPTORSET
	StatusRecord::new(0xC01E_032B, 0xC026_232B, 0, "The specified monitor descriptor is invalid."), // STATUS_GRAPHICS_INVALID_MONITORDESCRIPTOR
	StatusRecord::new(0xC01E_032C, 0xC026_232C, 0, "The specified descriptor is not in the specified monitor descriptor set."), // STATUS_GRAPHICS_MONITORDESCRIPTOR_NOT_IN_SET
	StatusRecord::new(0xC01E_032D, 0xC026_232D, 0, "The specified descriptor is already in the specified monitor descriptor set."), // STATUS_GRAPHICS_MONITORDESCRIPTOR_ALREADY_IN_SET
	StatusRecord::new(0xC01E_032E, 0xC026_232E, 0, "The ID of the specified monitor descriptor is being used by another descriptor in the set."), // STATUS_GRAPHICS_MONITORDESCRIPTOR_ID_MUST_BE_UNIQUE
	StatusRecord::new(0xC01E_032F, 0xC026_232F, 0, "The specified video present target subset type is invalid."), // STATUS_GRAPHICS_INVALID_VIDPN_TARGET_SUBSET_TYPE
	StatusRecord::new(0xC01E_0330, 0xC026_2330, 0, "Two or more of the specified resources are not related to each other, as defined by the interface semantics."), // STATUS_GRAPHICS_RESOURCES_NOT_RELATED
	StatusRecord::new(0xC01E_0331, 0xC026_2331, 0, "The ID of the specified video present source is being used by another source in the set."), // STATUS_GRAPHICS_SOURCE_ID_MUST_BE_UNIQUE
	StatusRecord::new(0xC01E_0332, 0xC026_2332, 0, "The ID of the specified video present target is being used by another target in the set."), // STATUS_GRAPHICS_TARGET_ID_MUST_BE_UNIQUE
	StatusRecord::new(0xC01E_0333, 0xC026_2333, 0, "The specified VidPN source cannot be used because there is no available VidPN target to connect it to."), // STATUS_GRAPHICS_NO_AVAILABLE_VIDPN_TARGET
	StatusRecord::new(0xC01E_0334, 0xC026_2334, 0, "The newly arrived monitor could not be associated with a display adapter."), // STATUS_GRAPHICS_MONITOR_COULD_NOT_BE_ASSOCIATED_WITH_ADAPTER
	StatusRecord::new(0xC01E_0335, 0xC026_2335, 0, "The particular display adapter does not have an associated VidPN manager."), // STATUS_GRAPHICS_NO_VIDPNMGR
	StatusRecord::new(0xC01E_0336, 0xC026_2336, 0, "The VidPN manager of the particular display adapter does not have an active VidPN."), // STATUS_GRAPHICS_NO_ACTIVE_VIDPN
	StatusRecord::new(0xC01E_0337, 0xC026_2337, 0, "The specified VidPN topology is stale; obtain the new topology."), // STATUS_GRAPHICS_STALE_VIDPN_TOPOLOGY
	StatusRecord::new(0xC01E_0338, 0xC026_2338, 0, "No monitor is connected on the specified video present target."), // STATUS_GRAPHICS_MONITOR_NOT_CONNECTED
	StatusRecord::new(0xC01E_0339, 0xC026_2339, 0, "The specified source is not part of the specified VidPN's topology."), // STATUS_GRAPHICS_SOURCE_NOT_IN_TOPOLOGY
	StatusRecord::new(0xC01E_033A, 0xC026_233A, 0, "The specified primary surface size is invalid."), // STATUS_GRAPHICS_INVALID_PRIMARYSURFACE_SIZE
	StatusRecord::new(0xC01E_033B, 0xC026_233B, 0, "The specified visible region size is invalid."), // STATUS_GRAPHICS_INVALID_VISIBLEREGION_SIZE
	StatusRecord::new(0xC01E_033C, 0xC026_233C, 0, "The specified stride is invalid."), // STATUS_GRAPHICS_INVALID_STRIDE
	StatusRecord::new(0xC01E_033D, 0xC026_233D, 0, "The specified pixel format is invalid."), // STATUS_GRAPHICS_INVALID_PIXELFORMAT
	StatusRecord::new(0xC01E_033E, 0xC026_233E, 0, "The specified color basis is invalid."), // STATUS_GRAPHICS_INVALID_COLORBASIS
	StatusRecord::new(0xC01E_033F, 0xC026_233F, 0, "The specified pixel value access mode is invalid."), // STATUS_GRAPHICS_INVALID_PIXELVALUEACCESSMODE
	StatusRecord::new(0xC01E_0340, 0xC026_2340, 0, "The specified target is not part of the specified VidPN's topology."), // STATUS_GRAPHICS_TARGET_NOT_IN_TOPOLOGY
	StatusRecord::new(0xC01E_0341, 0xC026_2341, 0, "Failed to acquire the display mode management interface."), // STATUS_GRAPHICS_NO_DISPLAY_MODE_MANAGEMENT_SUPPORT
	StatusRecord::new(0xC01E_0342, 0xC026_2342, 0, "The specified VidPN source is already owned by a DMM client and cannot be used until that client releases it."), // STATUS_GRAPHICS_VIDPN_SOURCE_IN_USE
	StatusRecord::new(0xC01E_0343, 0xC026_2343, 0, "The specified VidPN is active and cannot be accessed."), // STATUS_GRAPHICS_CANT_ACCESS_ACTIVE_VIDPN
	StatusRecord::new(0xC01E_0344, 0xC026_2344, 0, "The specified VidPN's present path importance ordinal is invalid."), // STATUS_GRAPHICS_INVALID_PATH_IMPORTANCE_ORDINAL
	StatusRecord::new(0xC01E_0345, 0xC026_2345, 0, "The specified VidPN's present path content geometry transformation is invalid."), // STATUS_GRAPHICS_INVALID_PATH_CONTENT_GEOMETRY_TRANSFORMATION
	StatusRecord::new(0xC01E_0346, 0xC026_2346, 0, "The specified content geometry transformation is not supported on the respective VidPN present path."), // STATUS_GRAPHICS_PATH_CONTENT_GEOMETRY_TRANSFORMATION_NOT_SUPPORTED
	StatusRecord::new(0xC01E_0347, 0xC026_2347, 0, "The specified gamma ramp is invalid."), // STATUS_GRAPHICS_INVALID_GAMMA_RAMP
	StatusRecord::new(0xC01E_0348, 0xC026_2348, 0, "The specified gamma ramp is not supported on the respective VidPN present path."), // STATUS_GRAPHICS_GAMMA_RAMP_NOT_SUPPORTED
	StatusRecord::new(0xC01E_0349, 0xC026_2349, 0, "Multisampling is not supported on the respective VidPN present path."), // STATUS_GRAPHICS_MULTISAMPLING_NOT_SUPPORTED
	StatusRecord::new(0xC01E_034A, 0xC026_234A, 0, "The specified mode is not in the specified mode set."), // STATUS_GRAPHICS_MODE_NOT_IN_MODESET
	StatusRecord::new(0xC01E_034D, 0xC026_234D, 0, "The specified VidPN topology recommendation reason is invalid."), // STATUS_GRAPHICS_INVALID_VIDPN_TOPOLOGY_RECOMMENDATION_REASON
	StatusRecord::new(0xC01E_034E, 0xC026_234E, 0, "The specified VidPN present path content type is invalid."), // STATUS_GRAPHICS_INVALID_PATH_CONTENT_TYPE
	StatusRecord::new(0xC01E_034F, 0xC026_234F, 0, "The specified VidPN present path copy protection type is invalid."), // STATUS_GRAPHICS_INVALID_COPYPROTECTION_TYPE
	StatusRecord::new(0xC01E_0350, 0xC026_2350, 0, "Only one unassigned mode set can exist at any one time for a particular VidPN source or target."), // STATUS_GRAPHICS_UNASSIGNED_MODESET_ALREADY_EXISTS
	StatusRecord::new(0xC01E_0352, 0xC026_2352, 0, "The specified scan line ordering type is invalid."), // STATUS_GRAPHICS_INVALID_SCANLINE_ORDERING
	StatusRecord::new(0xC01E_0353, 0xC026_2353, 0, "The topology changes are not allowed for the specified VidPN."), // STATUS_GRAPHICS_TOPOLOGY_CHANGES_NOT_ALLOWED
	StatusRecord::new(0xC01E_0354, 0xC026_2354, 0, "All available importance ordinals are being used in the specified topology."), // STATUS_GRAPHICS_NO_AVAILABLE_IMPORTANCE_ORDINALS
	StatusRecord::new(0xC01E_0355, 0xC026_2355, 0, "The specified primary surface has a different private-format attribute than the current primary surface."), // STATUS_GRAPHICS_INCOMPATIBLE_PRIVATE_FORMAT
	StatusRecord::new(0xC01E_0356, 0xC026_2356, 0, "The specified mode-pruning algorithm is invalid."), // STATUS_GRAPHICS_INVALID_MODE_PRUNING_ALGORITHM
	StatusRecord::new(0xC01E_0357, 0xC026_2357, 0, "The specified monitor-capability origin is invalid."), // STATUS_GRAPHICS_INVALID_MONITOR_CAPABILITY_ORIGIN
	StatusRecord::new(0xC01E_0358, 0xC026_2358, 0, "The specified monitor-frequency range constraint is invalid."), // STATUS_GRAPHICS_INVALID_MONITOR_FREQUENCYRANGE_CONSTRAINT
	StatusRecord::new(0xC01E_0359, 0xC026_2359, 0, "The maximum supported number of present paths has been reached."), // STATUS_GRAPHICS_MAX_NUM_PATHS_REACHED
	StatusRecord::new(0xC01E_035A, 0xC026_235A, 0, "The miniport requested that augmentation be canceled for the specified source of the specified VidPN's topology."), // STATUS_GRAPHICS_CANCEL_VIDPN_TOPOLOGY_AUGMENTATION
	StatusRecord::new(0xC01E_035B, 0xC026_235B, 0, "The specified client type was not recognized."), // STATUS_GRAPHICS_INVALID_CLIENT_TYPE
	StatusRecord::new(0xC01E_035C, 0xC026_235C, 0, "The client VidPN is not set on this adapter (for example, no user mode-initiated mode changes have taken place on this adapter)."), // STATUS_GRAPHICS_CLIENTVIDPN_NOT_SET
	StatusRecord::new(0xC01E_0400, 0xC026_2400, 0, "The specified display adapter child device already has an external device connected to it."), // STATUS_GRAPHICS_SPECIFIED_CHILD_ALREADY_CONNECTED
	StatusRecord::new(0xC01E_0401, 0xC026_2401, 0, "The display adapter child device does not support reporting a descriptor."), // STATUS_GRAPHICS_CHILD_DESCRIPTOR_NOT_SUPPORTED
	StatusRecord::new(0xC01E_0430, 0xC026_2430, 0, "The display adapter is not linked to any other adapters."), // STATUS_GRAPHICS_NOT_A_LINKED_ADAPTER
	StatusRecord::new(0xC01E_0431, 0xC026_2431, 0, "The lead adapter in a linked configuration was not enumerated yet."), // STATUS_GRAPHICS_LEADLINK_NOT_ENUMERATED
	StatusRecord::new(0xC01E_0432, 0xC026_2432, 0, "Some chain adapters in a linked configuration have not yet been enumerated."), // STATUS_GRAPHICS_CHAINLINKS_NOT_ENUMERATED
	StatusRecord::new(0xC01E_0433, 0xC026_2433, 0, "The chain of linked adapters is not ready to start because of an unknown failure."), // STATUS_GRAPHICS_ADAPTER_CHAIN_NOT_READY
	StatusRecord::new(0xC01E_0434, 0xC026_2434, 0, "An attempt was made to start a lead link display adapter when the chain links had not yet started."), // STATUS_GRAPHICS_CHAINLINKS_NOT_STARTED
	StatusRecord::new(0xC01E_0435, 0xC026_2435, 0, "An attempt was made to turn on a lead link display adapter when the chain links were turned off."), // STATUS_GRAPHICS_CHAINLINKS_NOT_POWERED_ON
	StatusRecord::new(0xC01E_0436, 0xC026_2436, 0, "The adapter link was found in an inconsistent state. Not all adapters are in an expected PNP/power state."), // STATUS_GRAPHICS_INCONSISTENT_DEVICE_LINK_STATE
	StatusRecord::new(0xC01E_0438, 0xC026_2438, 0, "The driver trying to start is not the same as the driver for the posted display adapter."), // STATUS_GRAPHICS_NOT_POST_DEVICE_DRIVER
	StatusRecord::new(0xC01E_043B, 0xC026_243B, 0, "An operation is being attempted that requires the display adapter to be in a quiescent state."), // STATUS_GRAPHICS_ADAPTER_ACCESS_NOT_EXCLUDED
	StatusRecord::new(0xC01E_0500, 0xC026_2500, 0, "The driver does not support OPM."), // STATUS_GRAPHICS_OPM_NOT_SUPPORTED
	StatusRecord::new(0xC01E_0501, 0xC026_2501, 0, "The driver does not support COPP."), // STATUS_GRAPHICS_COPP_NOT_SUPPORTED
	StatusRecord::new(0xC01E_0502, 0xC026_2502, 0, "The driver does not support UAB."), // STATUS_GRAPHICS_UAB_NOT_SUPPORTED
	StatusRecord::new(0xC01E_0503, 0xC026_2503, 0, "The specified encrypted parameters are invalid."), // STATUS_GRAPHICS_OPM_INVALID_ENCRYPTED_PARAMETERS
	StatusRecord::new(0xC01E_0504, 0xC026_2504, 0, "An array passed to a function cannot hold all of the data that the function wants to put in it."), // STATUS_GRAPHICS_OPM_PARAMETER_ARRAY_TOO_SMALL
	StatusRecord::new(0xC01E_0505, 0xC026_2505, 0, "The GDI display device passed to this function does not have any active protected outputs."), // STATUS_GRAPHICS_OPM_NO_PROTECTED_OUTPUTS_EXIST
	StatusRecord::new(0xC01E_0506, 0xC026_2506, 0, "The PVP display device name passed to this function does not match any known PVP display devices."), // STATUS_GRAPHICS_PVP_NO_DISPLAY_DEVICE_CORRESPONDS_TO_NAME
	StatusRecord::new(0xC01E_0507, 0xC026_2507, 0, "This function failed because the GDI display device passed to it was not attached to the Windows desktop."), // STATUS_GRAPHICS_PVP_DISPLAY_DEVICE_NOT_ATTACHED_TO_DESKTOP
	StatusRecord::new(0xC01E_0508, 0xC026_2508, 0, "The PVP does not support mirroring display devices because they do not have any protected outputs."), // STATUS_GRAPHICS_PVP_MIRRORING_DEVICES_NOT_SUPPORTED
	StatusRecord::new(0xC01E_050A, 0xC026_250A, 0, "The function failed because an invalid pointer parameter was passed to it."), // STATUS_GRAPHICS_OPM_INVALID_POINTER
	StatusRecord::new(0xC01E_050B, 0xC026_250B, 0, "An internal error caused an operation to fail."), // STATUS_GRAPHICS_OPM_INTERNAL_ERROR
	StatusRecord::new(0xC01E_050C, 0xC026_250C, 0, "The function failed because the caller passed in an invalid OPM user-mode handle."), // STATUS_GRAPHICS_OPM_INVALID_HANDLE
	StatusRecord::new(0xC01E_050D, 0xC026_250D, 0, "This function failed because the GDI device passed to it did not have any monitors associated with it."), // STATUS_GRAPHICS_PVP_NO_MONITORS_CORRESPONDING_TO_DISPLAY_DEVICE
	StatusRecord::new(0xC01E_050E, 0xC026_250E, 0, "A certificate could not be returned because the certificate buffer passed to the function was too small."), // STATUS_GRAPHICS_PVP_INVALID_CERTIFICATE_LENGTH
	StatusRecord::new(0xC01E_050F, 0xC026_250F, 0, "DxgkDdiOpmCreateProtectedOutput() could not create a protected output because the video present target is in spanning mode."), // STATUS_GRAPHICS_OPM_SPANNING_MODE_ENABLED
	StatusRecord::new(0xC01E_0510, 0xC026_2510, 0, "DxgkDdiOpmCreateProtectedOutput() could not create a protected output because the video present target is in theater mode."), // STATUS_GRAPHICS_OPM_THEATER_MODE_ENABLED
	StatusRecord::new(0xC01E_0511, 0xC026_2511, 0, "The function call failed because the display adapter's hardware functionality scan (HFS) failed to validate the graphics hardware."), // STATUS_GRAPHICS_PVP_HFS_FAILED
	StatusRecord::new(0xC01E_0512, 0xC026_2512, 0, "The HDCP SRM passed to this function did not comply with section 5 of the HDCP 1.1 specification."), // STATUS_GRAPHICS_OPM_INVALID_SRM
	StatusRecord::new(0xC01E_0513, 0xC026_2513, 0, "The protected output cannot enable the HDCP system because it does not support it."), // STATUS_GRAPHICS_OPM_OUTPUT_DOES_NOT_SUPPORT_HDCP
	StatusRecord::new(0xC01E_0514, 0xC026_2514, 0, "The protected output cannot enable analog copy protection because it does not support it."), // STATUS_GRAPHICS_OPM_OUTPUT_DOES_NOT_SUPPORT_ACP
	StatusRecord::new(0xC01E_0515, 0xC026_2515, 0, "The protected output cannot enable the CGMS-A protection technology because it does not support it."), // STATUS_GRAPHICS_OPM_OUTPUT_DOES_NOT_SUPPORT_CGMSA
	StatusRecord::new(0xC01E_0516, 0xC026_2516, 0, "DxgkDdiOPMGetInformation() cannot return the version of the SRM being used because the application never successfully passed an SRM to the protected output."), // STATUS_GRAPHICS_OPM_HDCP_SRM_NEVER_SET
	StatusRecord::new(0xC01E_0517, 0xC026_2517, 0, "DxgkDdiOPMConfigureProtectedOutput() cannot enable the specified output protection technology because the screen resolution is too high."), // STATUS_GRAPHICS_OPM_RESOLUTION_TOO_HIGH
	StatusRecord::new(0xC01E_0518, 0xC026_2518, 0, "DxgkDdiOPMConfigureProtectedOutput() cannot enable HDCP because other physical outputs are using the display adapter's HDCP hardware."), // STATUS_GRAPHICS_OPM_ALL_HDCP_HARDWARE_ALREADY_IN_USE
	StatusRecord::new(0xC01E_051A, 0xC026_251A, 0, "The operating system asynchronously destroyed this OPM-protected output because the operating system state changed."), // STATUS_GRAPHICS_OPM_PROTECTED_OUTPUT_NO_LONGER_EXISTS
	StatusRecord::new(0xC01E_051C, 0xC026_251C, 0, "OPM functions cannot be called on a protected output that does not have COPP semantics."), // STATUS_GRAPHICS_OPM_PROTECTED_OUTPUT_DOES_NOT_HAVE_COPP_SEMANTICS
	StatusRecord::new(0xC01E_051D, 0xC026_251D, 0, "The DxgkDdiOPMGetInformation() and DxgkDdiOPMGetCOPPCompatibleInformation() functions return this error code if the passed-in sequence number is not the expected sequence number or the passed-in OMAC value is invalid."), // STATUS_GRAPHICS_OPM_INVALID_INFORMATION_REQUEST
	StatusRecord::new(0xC01E_051E, 0xC026_251E, 0, "The function failed because an unexpected error occurred inside a display driver."), // STATUS_GRAPHICS_OPM_DRIVER_INTERNAL_ERROR
	StatusRecord::new(0xC01E_051F, 0xC026_251F, 0, "OPM functions cannot be called on a protected output that has COPP semantics."), // STATUS_GRAPHICS_OPM_PROTECTED_OUTPUT_DOES_NOT_HAVE_OPM_SEMANTICS
	StatusRecord::new(0xC01E_0520, 0xC026_2520, 0, "The DxgkDdiOPMGetCOPPCompatibleInformation and DxgkDdiOPMConfigureProtectedOutput functions return this error if the display driver does not support the DXGKMDT_OPM_GET_ACP_AND_CGMSA_SIGNALING and DXGKMDT_OPM_SET_ACP_AND_CGMSA_SIGNALING GUIDs."), // STATUS_GRAPHICS_OPM_SIGNALING_NOT_SUPPORTED
	StatusRecord::new(0xC01E_0521, 0xC026_2521, 0, "The DxgkDdiOPMConfigureProtectedOutput function returns this error code if the passed-in sequence number is not the expected sequence number or the passed-in OMAC value is invalid."), // STATUS_GRAPHICS_OPM_INVALID_CONFIGURATION_REQUEST
	StatusRecord::new(0xC01E_0580, 0xC026_2580, 0, "The monitor connected to the specified video output does not have an I2C bus."), // STATUS_GRAPHICS_I2C_NOT_SUPPORTED
	StatusRecord::new(0xC01E_0581, 0xC026_2581, 0, "No device on the I2C bus has the specified address."), // STATUS_GRAPHICS_I2C_DEVICE_DOES_NOT_EXIST
	StatusRecord::new(0xC01E_0582, 0xC026_2582, 0, "An error occurred while transmitting data to the device on the I2C bus."), // STATUS_GRAPHICS_I2C_ERROR_TRANSMITTING_DATA
	StatusRecord::new(0xC01E_0583, 0xC026_2583, 0, "An error occurred while receiving data from the device on the I2C bus."), // STATUS_GRAPHICS_I2C_ERROR_RECEIVING_DATA
	StatusRecord::new(0xC01E_0584, 0xC026_2584, 0, "The monitor does not support the specified VCP code."), // STATUS_GRAPHICS_DDCCI_VCP_NOT_SUPPORTED
	StatusRecord::new(0xC01E_0585, 0xC026_2585, 0, "The data received from the monitor is invalid."), // STATUS_GRAPHICS_DDCCI_INVALID_DATA
	StatusRecord::new(0xC01E_0586, 0xC026_2586, 0, "A function call failed because a monitor returned an invalid timing status byte when the operating system used the DDC/CI get timing report and timing message command to get a timing report from a monitor."), // STATUS_GRAPHICS_DDCCI_MONITOR_RETURNED_INVALID_TIMING_STATUS_BYTE
	StatusRecord::new(0xC01E_0587, 0xC026_2587, 0, "A monitor returned a DDC/CI capabilities string that did not comply with the ACCESS.bus 3.0, DDC/CI 1.1, or MCCS 2 Revision 1 specification."), // STATUS_GRAPHICS_DDCCI_INVALID_CAPABILITIES_STRING
	StatusRecord::new(0xC01E_0588, 0xC026_2588, 0, "An internal error caused an operation to fail."), // STATUS_GRAPHICS_MCA_INTERNAL_ERROR
	StatusRecord::new(0xC01E_0589, 0xC026_2589, 0, "An operation failed because a DDC/CI message had an invalid value in its command field."), // STATUS_GRAPHICS_DDCCI_INVALID_MESSAGE_COMMAND
	StatusRecord::new(0xC01E_058A, 0xC026_258A, 0, "This error occurred because a DDC/CI message had an invalid value in its length field."), // STATUS_GRAPHICS_DDCCI_INVALID_MESSAGE_LENGTH
	StatusRecord::new(0xC01E_058B, 0xC026_258B, 0, "This error occurred because the value in a DDC/CI message's checksum field did not match the message's computed checksum value."), // STATUS_GRAPHICS_DDCCI_INVALID_MESSAGE_CHECKSUM
	StatusRecord::new(0xC01E_058C, 0xC026_258C, 0, "This function failed because an invalid monitor handle was passed to it."), // STATUS_GRAPHICS_INVALID_PHYSICAL_MONITOR_HANDLE
	StatusRecord::new(0xC01E_058D, 0xC026_258D, 0, "The operating system asynchronously destroyed the monitor that corresponds to this handle because the operating system's state changed."), // STATUS_GRAPHICS_MONITOR_NO_LONGER_EXISTS
	StatusRecord::new(0xC01E_05E0, 0xC026_25E0, 0, "This function can be used only if a program is running in the local console session. It cannot be used if a program is running on a remote desktop session or on a terminal server session."), // STATUS_GRAPHICS_ONLY_CONSOLE_SESSION_SUPPORTED
	StatusRecord::new(0xC01E_05E1, 0xC026_25E1, 0, "This function cannot find an actual GDI display device that corresponds to the specified GDI display device name."), // STATUS_GRAPHICS_NO_DISPLAY_DEVICE_CORRESPONDS_TO_NAME
	StatusRecord::new(0xC01E_05E2, 0xC026_25E2, 0, "The function failed because the specified GDI display device was not attached to the Windows desktop."), // STATUS_GRAPHICS_DISPLAY_DEVICE_NOT_ATTACHED_TO_DESKTOP
	StatusRecord::new(0xC01E_05E3, 0xC026_25E3, 0, "This function does not support GDI mirroring display devices because GDI mirroring display devices do not have any physical monitors associated with them."), // STATUS_GRAPHICS_MIRRORING_DEVICES_NOT_SUPPORTED
	StatusRecord::new(0xC01E_05E4, 0xC026_25E4, 0, "The function failed because an invalid pointer parameter was passed to it."), // STATUS_GRAPHICS_INVALID_POINTER
	StatusRecord::new(0xC01E_05E5, 0xC026_25E5, 0, "This function failed because the GDI device passed to it did not have a monitor associated with it."), // STATUS_GRAPHICS_NO_MONITORS_CORRESPOND_TO_DISPLAY_DEVICE
	StatusRecord::new(0xC01E_05E6, 0xC026_25E6, 0, "An array passed to the function cannot hold all of the data that the function must copy into the array."), // STATUS_GRAPHICS_PARAMETER_ARRAY_TOO_SMALL
	StatusRecord::new(0xC01E_05E7, 0xC026_25E7, 0, "An internal error caused an operation to fail."), // STATUS_GRAPHICS_INTERNAL_ERROR
	StatusRecord::new(0xC01E_05E8, 0xC026_25E8, 0, "The function failed because the current session is changing its type. This function cannot be called when the current session is changing its type."), // STATUS_GRAPHICS_SESSION_TYPE_CHANGE_IN_PROGRESS

	StatusRecord::new(0xC021_0000, 0x8031_0000, 0, "The volume must be unlocked before it can be used."), // STATUS_FVE_LOCKED_VOLUME
	StatusRecord::new(0xC021_0001, 0x8031_0001, 0, "The volume is fully decrypted and no key is available."), // STATUS_FVE_NOT_ENCRYPTED
	StatusRecord::new(0xC021_0002, 0x8031_0002, 0, "The control block for the encrypted volume is not valid."), // STATUS_FVE_BAD_INFORMATION
	StatusRecord::new(0xC021_0003, 0x8031_0003, 0, "Not enough free space remains on the volume to allow encryption."), // STATUS_FVE_TOO_SMALL
	StatusRecord::new(0xC021_0004, 0x8031_0004, 0, "The partition cannot be encrypted because the file system is not supported."), // STATUS_FVE_FAILED_WRONG_FS
	StatusRecord::new(0xC021_0005, 0x8031_0005, 0, "The file system is inconsistent. Run the Check Disk utility."), // STATUS_FVE_BAD_PARTITION_SIZE
	StatusRecord::new(0xC021_0006, 0x8031_0006, 0, "The file system does not extend to the end of the volume."), // STATUS_FVE_FS_NOT_EXTENDED
	StatusRecord::new(0xC021_0007, 0x8031_0007, 0, "This operation cannot be performed while a file system is mounted on the volume."), // STATUS_FVE_FS_MOUNTED
	StatusRecord::new(0xC021_0008, 0x8031_0008, 0, "BitLocker Drive Encryption is not included with this version of Windows."), // STATUS_FVE_NO_LICENSE
	StatusRecord::new(0xC021_0009, 0x8031_0009, 0, "The requested action was denied by the FVE control engine."), // STATUS_FVE_ACTION_NOT_ALLOWED
	StatusRecord::new(0xC021_000A, 0x8031_000A, 0, "The data supplied is malformed."), // STATUS_FVE_BAD_DATA
	StatusRecord::new(0xC021_000B, 0x8031_000B, 0, "The volume is not bound to the system."), // STATUS_FVE_VOLUME_NOT_BOUND
	StatusRecord::new(0xC021_000C, 0x8031_000C, 0, "The volume specified is not a data volume."), // STATUS_FVE_NOT_DATA_VOLUME
	StatusRecord::new(0xC021_000D, 0x8031_000D, 0, "A read operation failed while converting the volume."), // STATUS_FVE_CONV_READ_ERROR
	StatusRecord::new(0xC021_000E, 0x8031_000E, 0, "A write operation failed while converting the volume."), // STATUS_FVE_CONV_WRITE_ERROR
	StatusRecord::new(0xC021_000F, 0x8031_000F, 0, "The control block for the encrypted volume was updated by another thread. Try again."), // STATUS_FVE_OVERLAPPED_UPDATE
	StatusRecord::new(0xC021_0010, 0x8031_0010, 0, "The volume encryption algorithm cannot be used on this sector size."), // STATUS_FVE_FAILED_SECTOR_SIZE
	StatusRecord::new(0xC021_0011, 0x8031_0011, 0, "BitLocker recovery authentication failed."), // STATUS_FVE_FAILED_AUTHENTICATION
	StatusRecord::new(0xC021_0012, 0x8031_0012, 0, "The volume specified is not the boot operating system volume."), // STATUS_FVE_NOT_OS_VOLUME
	StatusRecord::new(0xC021_0013, 0x8031_0013, 0, "The BitLocker startup key or recovery password could not be read from external media."), // STATUS_FVE_KEYFILE_NOT_FOUND
	StatusRecord::new(0xC021_0014, 0x8031_0014, 0, "The BitLocker startup key or recovery password file is corrupt or invalid."), // STATUS_FVE_KEYFILE_INVALID
	StatusRecord::new(0xC021_0015, 0x8031_0015, 0, "The BitLocker encryption key could not be obtained from the startup key or the recovery password."), // STATUS_FVE_KEYFILE_NO_VMK
	StatusRecord::new(0xC021_0016, 0x8031_0016, 0, "The TPM is disabled."), // STATUS_FVE_TPM_DISABLED
	StatusRecord::new(0xC021_0017, 0x8031_0017, 0, "The authorization data for the SRK of the TPM is not zero."), // STATUS_FVE_TPM_SRK_AUTH_NOT_ZERO
	StatusRecord::new(0xC021_0018, 0x8031_0018, 0, "The system boot information changed or the TPM locked out access to BitLocker encryption keys until the computer is restarted."), // STATUS_FVE_TPM_INVALID_PCR
	StatusRecord::new(0xC021_0019, 0x8031_0019, 0, "The BitLocker encryption key could not be obtained from the TPM."), // STATUS_FVE_TPM_NO_VMK
	StatusRecord::new(0xC021_001A, 0x8031_001A, 0, "The BitLocker encryption key could not be obtained from the TPM and PIN."), // STATUS_FVE_PIN_INVALID
	StatusRecord::new(0xC021_001B, 0x8031_001B, 0, "A boot application hash does not match the hash computed when BitLocker was turned on."), // STATUS_FVE_AUTH_INVALID_APPLICATION
	StatusRecord::new(0xC021_001C, 0x8031_001C, 0, "The Boot Configuration Data (BCD) settings are not supported or have changed because BitLocker was enabled."), // STATUS_FVE_AUTH_INVALID_CONFIG
	StatusRecord::new(0xC021_001D, 0x8031_001D, 0, "Boot debugging is enabled. Run Windows Boot Configuration Data Store Editor (bcdedit.exe) to turn it off."), // STATUS_FVE_DEBUGGER_ENABLED
	StatusRecord::new(0xC021_001E, 0x8031_001E, 0, "The BitLocker encryption key could not be obtained."), // STATUS_FVE_DRY_RUN_FAILED
	StatusRecord::new(0xC021_001F, 0x8031_001F, 0, "The metadata disk region pointer is incorrect."), // STATUS_FVE_BAD_METADATA_POINTER
	StatusRecord::new(0xC021_0020, 0x8031_0020, 0, "The backup copy of the metadata is out of date."), // STATUS_FVE_OLD_METADATA_COPY
	StatusRecord::new(0xC021_0021, 0x8031_0021, 0, "No action was taken because a system restart is required."), // STATUS_FVE_REBOOT_REQUIRED
	StatusRecord::new(0xC021_0022, 0x8031_0022, 0, "No action was taken because BitLocker Drive Encryption is in RAW access mode."), // STATUS_FVE_RAW_ACCESS
	StatusRecord::new(0xC021_0023, 0x8031_0023, 0, "BitLocker Drive Encryption cannot enter RAW access mode for this volume."), // STATUS_FVE_RAW_BLOCKED
	StatusRecord::new(0xC021_0024, 0x8031_0024, 0, "The auto-unlock master key was not available from the operating system volume. Retry the operation using the BitLocker WMI interface."), // STATUS_FVE_NO_AUTOUNLOCK_MASTER_KEY
	StatusRecord::new(0xC021_0025, 0x8031_0025, 0, "The system firmware failed to enable clearing of system memory on reboot."), // STATUS_FVE_MOR_FAILED
	StatusRecord::new(0xC021_0026, 0x8031_0026, 0, "This feature of BitLocker Drive Encryption is not included with this version of Windows."), // STATUS_FVE_NO_FEATURE_LICENSE
	StatusRecord::new(0xC021_0027, 0x8031_0027, 0, "Group policy does not permit turning off BitLocker Drive Encryption on roaming data volumes."), // STATUS_FVE_POLICY_USER_DISABLE_RDV_NOT_ALLOWED
	StatusRecord::new(0xC021_0028, 0x8031_0028, 0, "Bitlocker Drive Encryption failed to recover from aborted conversion. This could be due to either all conversion logs being corrupted or the media being write-protected."), // STATUS_FVE_CONV_RECOVERY_FAILED
	StatusRecord::new(0xC021_0029, 0x8031_0029, 0, "The requested virtualization size is too big."), // STATUS_FVE_VIRTUALIZED_SPACE_TOO_BIG
	StatusRecord::new(0xC021_002A, 0x8031_002A, 0, "The management information stored on the drive contained an unknown type. If you are using an old version of Windows, try accessing the drive from the latest version."), // STATUS_FVE_INVALID_DATUM_TYPE
	StatusRecord::new(0xC021_0030, 0x8031_0030, 0, "The drive is too small to be protected using BitLocker Drive Encryption."), // STATUS_FVE_VOLUME_TOO_SMALL
	StatusRecord::new(0xC021_0031, 0x8031_0031, 0, "The enhanced PIN contains characters that are not valid."), // STATUS_FVE_ENH_PIN_INVALID
	StatusRecord::new(0xC021_0032, 0x8031_0032, 0, "BitLocker Drive Encryption only supports used space only encryption on thin provisioned storage."), // STATUS_FVE_FULL_ENCRYPTION_NOT_ALLOWED_ON_TP_STORAGE
	StatusRecord::new(0xC021_0033, 0x8031_0033, 0, "BitLocker Drive Encryption does not support wiping free space on thin provisioned storage."), // STATUS_FVE_WIPE_NOT_ALLOWED_ON_TP_STORAGE
	StatusRecord::new(0xC021_0034, 0x8031_0034, 0, "This command can only be performed from the coordinator node for the specified CSV volume."), // STATUS_FVE_NOT_ALLOWED_ON_CSV_STACK
	StatusRecord::new(0xC021_0035, 0x8031_0035, 0, "This command cannot be performed on a volume when it is part of a cluster."), // STATUS_FVE_NOT_ALLOWED_ON_CLUSTER
	StatusRecord::new(0xC021_0036, 0x8031_0036, 0, "BitLocker did not revert to using BitLocker software encryption due to group policy configuration."), // STATUS_FVE_NOT_ALLOWED_TO_UPGRADE_WHILE_CONVERTING
	StatusRecord::new(0xC021_0037, 0x8031_0037, 0, "The drive cannot be managed by BitLocker because the drive's hardware encryption feature is already in use."), // STATUS_FVE_WIPE_CANCEL_NOT_APPLICABLE
	StatusRecord::new(0xC021_0038, 0x8031_0038, 0, "BitLocker cannot use hardware encryption because the drive failed the hardware encryption self test."), // STATUS_FVE_EDRIVE_DRY_RUN_FAILED
	StatusRecord::new(0xC021_0039, 0x8031_0039, 0, "Secure Boot has been disabled. Either Secure Boot must be re-enabled, or BitLocker must be suspended for Windows to start normally."), // STATUS_FVE_SECUREBOOT_DISABLED
	StatusRecord::new(0xC021_003A, 0x8031_003A, 0, "Secure Boot policy has unexpectedly changed."), // STATUS_FVE_SECUREBOOT_CONFIG_CHANGE
	StatusRecord::new(0xC021_003B, 0x8031_003B, 0, "The device is locked out by BitLocker Drive Encryption."), // STATUS_FVE_DEVICE_LOCKEDOUT
	StatusRecord::new(0xC021_003C, 0x8031_003C, 0, "This volume has been extended after BitLocker was enabled; decryption of only the used space is not possible."), // STATUS_FVE_VOLUME_EXTEND_PREVENTS_EOW_DECRYPT
	StatusRecord::new(0xC021_003D, 0x8031_003D, 0, "The volume is not a device encryption volume."), // STATUS_FVE_NOT_DE_VOLUME
	StatusRecord::new(0xC021_003E, 0x8031_003E, 0, "BitLocker protection is disabled on this volume."), // STATUS_FVE_PROTECTION_DISABLED
	StatusRecord::new(0xC021_003F, 0x8031_003F, 0, "BitLocker protection cannot be disabled on this volume."), // STATUS_FVE_PROTECTION_CANNOT_BE_DISABLED
	StatusRecord::new(0xC021_0040, 0x8031_0040, 0, "The requested operation is not allowed on the OS volume with kernel soft reboot."), // STATUS_FVE_OSV_KSR_NOT_ALLOWED

	StatusRecord::new(0xC022_0001, 0x8032_0001, 0, "The callout does not exist."), // STATUS_FWP_CALLOUT_NOT_FOUND
	StatusRecord::new(0xC022_0002, 0x8032_0002, 0, "The filter condition does not exist."), // STATUS_FWP_CONDITION_NOT_FOUND
	StatusRecord::new(0xC022_0003, 0x8032_0003, 0, "The filter does not exist."), // STATUS_FWP_FILTER_NOT_FOUND
	StatusRecord::new(0xC022_0004, 0x8032_0004, 0, "The layer does not exist."), // STATUS_FWP_LAYER_NOT_FOUND
	StatusRecord::new(0xC022_0005, 0x8032_0005, 0, "The provider does not exist."), // STATUS_FWP_PROVIDER_NOT_FOUND
	StatusRecord::new(0xC022_0006, 0x8032_0006, 0, "The provider context does not exist."), // STATUS_FWP_PROVIDER_CONTEXT_NOT_FOUND
	StatusRecord::new(0xC022_0007, 0x8032_0007, 0, "The sublayer does not exist."), // STATUS_FWP_SUBLAYER_NOT_FOUND
	StatusRecord::new(0xC022_0008, 0x8032_0008, 0, "The object does not exist."), // STATUS_FWP_NOT_FOUND
	StatusRecord::new(0xC022_0009, 0x8032_0009, 0, "An object with that GUID or LUID already exists."), // STATUS_FWP_ALREADY_EXISTS
	StatusRecord::new(0xC022_000A, 0x8032_000A, 0, "The object is referenced by other objects and cannot be deleted."), // STATUS_FWP_IN_USE
	StatusRecord::new(0xC022_000B, 0x8032_000B, 0, "The call is not allowed from within a dynamic session."), // STATUS_FWP_DYNAMIC_SESSION_IN_PROGRESS
	StatusRecord::new(0xC022_000C, 0x8032_000C, 0, "The call was made from the wrong session and cannot be completed."), // STATUS_FWP_WRONG_SESSION
	StatusRecord::new(0xC022_000D, 0x8032_000D, 0, "The call must be made from within an explicit transaction."), // STATUS_FWP_NO_TXN_IN_PROGRESS
	StatusRecord::new(0xC022_000E, 0x8032_000E, 0, "The call is not allowed from within an explicit transaction."), // STATUS_FWP_TXN_IN_PROGRESS
	StatusRecord::new(0xC022_000F, 0x8032_000F, 0, "The explicit transaction has been forcibly canceled."), // STATUS_FWP_TXN_ABORTED
	StatusRecord::new(0xC022_0010, 0x8032_0010, 0, "The session has been canceled."), // STATUS_FWP_SESSION_ABORTED
	StatusRecord::new(0xC022_0011, 0x8032_0011, 0, "The call is not allowed from within a read-only transaction."), // STATUS_FWP_INCOMPATIBLE_TXN
	StatusRecord::new(0xC022_0012, 0x8032_0012, 0, "The call timed out while waiting to acquire the transaction lock."), // STATUS_FWP_TIMEOUT
	StatusRecord::new(0xC022_0013, 0x8032_0013, 0, "The collection of network diagnostic events is disabled."), // STATUS_FWP_NET_EVENTS_DISABLED
	StatusRecord::new(0xC022_0014, 0x8032_0014, 0, "The operation is not supported by the specified layer."), // STATUS_FWP_INCOMPATIBLE_LAYER
	StatusRecord::new(0xC022_0015, 0x8032_0015, 0, "The call is allowed for kernel-mode callers only."), // STATUS_FWP_KM_CLIENTS_ONLY
	StatusRecord::new(0xC022_0016, 0x8032_0016, 0, "The call tried to associate two objects with incompatible lifetimes."), // STATUS_FWP_LIFETIME_MISMATCH
	StatusRecord::new(0xC022_0017, 0x8032_0017, 0, "The object is built-in and cannot be deleted."), // STATUS_FWP_BUILTIN_OBJECT
	StatusRecord::new(0xC022_0018, 0x8032_0018, 0, "The maximum number of callouts has been reached."), // STATUS_FWP_TOO_MANY_CALLOUTS
	StatusRecord::new(0xC022_0019, 0x8032_0019, 0, "A notification could not be delivered because a message queue has reached maximum capacity."), // STATUS_FWP_NOTIFICATION_DROPPED
	StatusRecord::new(0xC022_001A, 0x8032_001A, 0, "The traffic parameters do not match those for the security association context."), // STATUS_FWP_TRAFFIC_MISMATCH
	StatusRecord::new(0xC022_001B, 0x8032_001B, 0, "The call is not allowed for the current security association state."), // STATUS_FWP_INCOMPATIBLE_SA_STATE
	StatusRecord::new(0xC022_001C, 0x8032_001C, 0, "A required pointer is null."), // STATUS_FWP_NULL_POINTER
	StatusRecord::new(0xC022_001D, 0x8032_001D, 0, "An enumerator is not valid."), // STATUS_FWP_INVALID_ENUMERATOR
	StatusRecord::new(0xC022_001E, 0x8032_001E, 0, "The flags field contains an invalid value."), // STATUS_FWP_INVALID_FLAGS
	StatusRecord::new(0xC022_001F, 0x8032_001F, 0, "A network mask is not valid."), // STATUS_FWP_INVALID_NET_MASK
	StatusRecord::new(0xC022_0020, 0x8032_0020, 0, "An FWP_RANGE is not valid."), // STATUS_FWP_INVALID_RANGE
	StatusRecord::new(0xC022_0021, 0x8032_0021, 0, "The time interval is not valid."), // STATUS_FWP_INVALID_INTERVAL
	StatusRecord::new(0xC022_0022, 0x8032_0022, 0, "An array that must contain at least one element has a zero length."), // STATUS_FWP_ZERO_LENGTH_ARRAY
	StatusRecord::new(0xC022_0023, 0x8032_0023, 0, "The displayData.name field cannot be null."), // STATUS_FWP_NULL_DISPLAY_NAME
	StatusRecord::new(0xC022_0024, 0x8032_0024, 0, "The action type is not one of the allowed action types for a filter."), // STATUS_FWP_INVALID_ACTION_TYPE
	StatusRecord::new(0xC022_0025, 0x8032_0025, 0, "The filter weight is not valid."), // STATUS_FWP_INVALID_WEIGHT
	StatusRecord::new(0xC022_0026, 0x8032_0026, 0, "A filter condition contains a match type that is not compatible with the operands."), // STATUS_FWP_MATCH_TYPE_MISMATCH
	StatusRecord::new(0xC022_0027, 0x8032_0027, 0, "An FWP_VALUE or FWPM_CONDITION_VALUE is of the wrong type."), // STATUS_FWP_TYPE_MISMATCH
	StatusRecord::new(0xC022_0028, 0x8032_0028, 0, "An integer value is outside the allowed range."), // STATUS_FWP_OUT_OF_BOUNDS
	StatusRecord::new(0xC022_0029, 0x8032_0029, 0, "A reserved field is nonzero."), // STATUS_FWP_RESERVED
	StatusRecord::new(0xC022_002A, 0x8032_002A, 0, "A filter cannot contain multiple conditions operating on a single field."), // STATUS_FWP_DUPLICATE_CONDITION
	StatusRecord::new(0xC022_002B, 0x8032_002B, 0, "A policy cannot contain the same keying module more than once."), // STATUS_FWP_DUPLICATE_KEYMOD
	StatusRecord::new(0xC022_002C, 0x8032_002C, 0, "The action type is not compatible with the layer."), // STATUS_FWP_ACTION_INCOMPATIBLE_WITH_LAYER
	StatusRecord::new(0xC022_002D, 0x8032_002D, 0, "The action type is not compatible with the sublayer."), // STATUS_FWP_ACTION_INCOMPATIBLE_WITH_SUBLAYER
	StatusRecord::new(0xC022_002E, 0x8032_002E, 0, "The raw context or the provider context is not compatible with the layer."), // STATUS_FWP_CONTEXT_INCOMPATIBLE_WITH_LAYER
	StatusRecord::new(0xC022_002F, 0x8032_002F, 0, "The raw context or the provider context is not compatible with the callout."), // STATUS_FWP_CONTEXT_INCOMPATIBLE_WITH_CALLOUT
	StatusRecord::new(0xC022_0030, 0x8032_0030, 0, "The authentication method is not compatible with the policy type."), // STATUS_FWP_INCOMPATIBLE_AUTH_METHOD
	StatusRecord::new(0xC022_0031, 0x8032_0031, 0, "The Diffie-Hellman group is not compatible with the policy type."), // STATUS_FWP_INCOMPATIBLE_DH_GROUP
	StatusRecord::new(0xC022_0032, 0x8032_0032, 0, "An IKE policy cannot contain an Extended Mode policy."), // STATUS_FWP_EM_NOT_SUPPORTED
	StatusRecord::new(0xC022_0033, 0x8032_0033, 0, "The enumeration template or subscription will never match any objects."), // STATUS_FWP_NEVER_MATCH
	StatusRecord::new(0xC022_0034, 0x8032_0034, 0, "The provider context is of the wrong type."), // STATUS_FWP_PROVIDER_CONTEXT_MISMATCH
	StatusRecord::new(0xC022_0035, 0x8032_0035, 0, "The parameter is incorrect."), // STATUS_FWP_INVALID_PARAMETER
	StatusRecord::new(0xC022_0036, 0x8032_0036, 0, "The maximum number of sublayers has been reached."), // STATUS_FWP_TOO_MANY_SUBLAYERS
	StatusRecord::new(0xC022_0037, 0x8032_0037, 0, "The notification function for a callout returned an error."), // STATUS_FWP_CALLOUT_NOTIFICATION_FAILED
	StatusRecord::new(0xC022_0038, 0x8032_0038, 0, "The IPsec authentication configuration is not compatible with the authentication type."), // STATUS_FWP_INVALID_AUTH_TRANSFORM
	StatusRecord::new(0xC022_0039, 0x8032_0039, 0, "The IPsec cipher configuration is not compatible with the cipher type."), // STATUS_FWP_INVALID_CIPHER_TRANSFORM
	StatusRecord::new(0xC022_003A, 0x8032_003A, 0, "The cipher transform is not compatible with the policy."), // STATUS_FWP_INCOMPATIBLE_CIPHER_TRANSFORM
	StatusRecord::new(0xC022_003B, 0x8032_003B, 0, "The combination of IPsec transform types is not valid."), // STATUS_FWP_INVALID_TRANSFORM_COMBINATION
	StatusRecord::new(0xC022_003C, 0x8032_003C, 0, "A policy cannot contain the same auth method more than once."), // STATUS_FWP_DUPLICATE_AUTH_METHOD
	StatusRecord::new(0xC022_003D, 0x8032_003D, 0, "A tunnel endpoint configuration is invalid."), // STATUS_FWP_INVALID_TUNNEL_ENDPOINT
	StatusRecord::new(0xC022_003E, 0x8032_003E, 0, "The WFP MAC Layers are not ready."), // STATUS_FWP_L2_DRIVER_NOT_READY
	StatusRecord::new(0xC022_003F, 0x8032_003F, 0, "A key manager capable of key dictation is already registered."), // STATUS_FWP_KEY_DICTATOR_ALREADY_REGISTERED
	StatusRecord::new(0xC022_0040, 0x8032_0040, 0, "A key manager dictated invalid keys."), // STATUS_FWP_KEY_DICTATION_INVALID_KEYING_MATERIAL
	StatusRecord::new(0xC022_0041, 0x8032_0041, 0, "The BFE IPsec Connection Tracking is disabled."), // STATUS_FWP_CONNECTIONS_DISABLED
	StatusRecord::new(0xC022_0042, 0x8032_0042, 0, "The DNS name is invalid."), // STATUS_FWP_INVALID_DNS_NAME
	StatusRecord::new(0xC022_0043, 0x8032_0043, 0, "The engine option is still enabled due to other configuration settings."), // STATUS_FWP_STILL_ON
	StatusRecord::new(0xC022_0044, 0x8032_0044, 0, "The IKEEXT service is not running."), // STATUS_FWP_IKEEXT_NOT_RUNNING
	StatusRecord::new(0xC022_0100, 0x8032_0100, 0, "The TCP/IP stack is not ready."), // STATUS_FWP_TCPIP_NOT_READY
	StatusRecord::new(0xC022_0101, 0x8032_0101, 0, "The injection handle is being closed by another thread."), // STATUS_FWP_INJECT_HANDLE_CLOSING
	StatusRecord::new(0xC022_0102, 0x8032_0102, 0, "The injection handle is stale."), // STATUS_FWP_INJECT_HANDLE_STALE
	StatusRecord::new(0xC022_0103, 0x8032_0103, 0, "The classify cannot be pended."), // STATUS_FWP_CANNOT_PEND
	StatusRecord::new(0xC022_0104, 0x8032_0104, 0, "The packet should be dropped, no ICMP should be sent."), // STATUS_FWP_DROP_NOICMP

	StatusRecord::new(0xC023_0001, 0x8034_0001, 0, "The binding to the network interface is being closed."), // STATUS_NDIS_CLOSING
	StatusRecord::new(0xC023_0002, 0x8034_0002, 0, "An invalid version was specified."), // STATUS_NDIS_BAD_VERSION
	StatusRecord::new(0xC023_0003, 0x8034_0003, 0, "An invalid characteristics table was used."), // STATUS_NDIS_BAD_CHARACTERISTICS
	StatusRecord::new(0xC023_0004, 0x8034_0004, 0, "Failed to find the network interface or the network interface is not ready."), // STATUS_NDIS_ADAPTER_NOT_FOUND
	StatusRecord::new(0xC023_0005, 0x8034_0005, 0, "Failed to open the network interface."), // STATUS_NDIS_OPEN_FAILED
	StatusRecord::new(0xC023_0006, 0x8034_0006, 0, "The network interface has encountered an internal unrecoverable failure."), // STATUS_NDIS_DEVICE_FAILED
	StatusRecord::new(0xC023_0007, 0x8034_0007, 0, "The multicast list on the network interface is full."), // STATUS_NDIS_MULTICAST_FULL
	StatusRecord::new(0xC023_0008, 0x8034_0008, 0, "An attempt was made to add a duplicate multicast address to the list."), // STATUS_NDIS_MULTICAST_EXISTS
	StatusRecord::new(0xC023_0009, 0x8034_0009, 0, "At attempt was made to remove a multicast address that was never added."), // STATUS_NDIS_MULTICAST_NOT_FOUND
	StatusRecord::new(0xC023_000A, 0x8034_000A, 0, "The network interface aborted the request."), // STATUS_NDIS_REQUEST_ABORTED
	StatusRecord::new(0xC023_000B, 0x8034_000B, 0, "The network interface cannot process the request because it is being reset."), // STATUS_NDIS_RESET_IN_PROGRESS
	StatusRecord::new(0xC023_000F, 0x8034_000F, 0, "An attempt was made to send an invalid packet on a network interface."), // STATUS_NDIS_INVALID_PACKET
	StatusRecord::new(0xC023_0010, 0x8034_0010, 0, "The specified request is not a valid operation for the target device."), // STATUS_NDIS_INVALID_DEVICE_REQUEST
	StatusRecord::new(0xC023_0011, 0x8034_0011, 0, "The network interface is not ready to complete this operation."), // STATUS_NDIS_ADAPTER_NOT_READY
	StatusRecord::new(0xC023_0014, 0x8034_0014, 0, "The length of the buffer submitted for this operation is not valid."), // STATUS_NDIS_INVALID_LENGTH
	StatusRecord::new(0xC023_0015, 0x8034_0015, 0, "The data used for this operation is not valid."), // STATUS_NDIS_INVALID_DATA
	StatusRecord::new(0xC023_0016, 0x8034_0016, 0, "The length of the submitted buffer for this operation is too small."), // STATUS_NDIS_BUFFER_TOO_SHORT
	StatusRecord::new(0xC023_0017, 0x8034_0017, 0, "The network interface does not support this object identifier."), // STATUS_NDIS_INVALID_OID
	StatusRecord::new(0xC023_0018, 0x8034_0018, 0, "The network interface has been removed."), // STATUS_NDIS_ADAPTER_REMOVED
	StatusRecord::new(0xC023_0019, 0x8034_0019, 0, "The network interface does not support this media type."), // STATUS_NDIS_UNSUPPORTED_MEDIA
	StatusRecord::new(0xC023_001A, 0x8034_001A, 0, "An attempt was made to remove a token ring group address that is in use by other components."), // STATUS_NDIS_GROUP_ADDRESS_IN_USE
	StatusRecord::new(0xC023_001B, 0x8034_001B, 0, "An attempt was made to map a file that cannot be found."), // STATUS_NDIS_FILE_NOT_FOUND
	StatusRecord::new(0xC023_001C, 0x8034_001C, 0, "An error occurred while NDIS tried to map the file."), // STATUS_NDIS_ERROR_READING_FILE
	StatusRecord::new(0xC023_001D, 0x8034_001D, 0, "An attempt was made to map a file that is already mapped."), // STATUS_NDIS_ALREADY_MAPPED
	StatusRecord::new(0xC023_001E, 0x8034_001E, 0, "An attempt to allocate a hardware resource failed because the resource is used by another component."), // STATUS_NDIS_RESOURCE_CONFLICT
	StatusRecord::new(0xC023_001F, 0x8034_001F, 0, "The I/O operation failed because the network media is disconnected or the wireless access point is out of range."), // STATUS_NDIS_MEDIA_DISCONNECTED
	StatusRecord::new(0xC023_0022, 0x8034_0022, 0, "The network address used in the request is invalid."), // STATUS_NDIS_INVALID_ADDRESS
	StatusRecord::new(0xC023_002A, 0x8034_002A, 0, "The offload operation on the network interface has been paused."), // STATUS_NDIS_PAUSED
	StatusRecord::new(0xC023_002B, 0x8034_002B, 0, "The network interface was not found."), // STATUS_NDIS_INTERFACE_NOT_FOUND
	StatusRecord::new(0xC023_002C, 0x8034_002C, 0, "The revision number specified in the structure is not supported."), // STATUS_NDIS_UNSUPPORTED_REVISION
	StatusRecord::new(0xC023_002D, 0x8034_002D, 0, "The specified port does not exist on this network interface."), // STATUS_NDIS_INVALID_PORT
	StatusRecord::new(0xC023_002E, 0x8034_002E, 0, "The current state of the specified port on this network interface does not support the requested operation."), // STATUS_NDIS_INVALID_PORT_STATE
	StatusRecord::new(0xC023_002F, 0x8034_002F, 0, "The miniport adapter is in a lower power state."), // STATUS_NDIS_LOW_POWER_STATE
	StatusRecord::new(0xC023_0030, 0x8034_0030, 0, "The miniport adapter requires a reinitialization."), // STATUS_NDIS_REINIT_REQUIRED
	StatusRecord::new(0xC023_0031, 0x8034_0031, 0, "The network interface has no queues available."), // STATUS_NDIS_NO_QUEUES
	StatusRecord::new(0xC023_00BB, 0x8034_00BB, 0, "The network interface does not support this request."), // STATUS_NDIS_NOT_SUPPORTED
	StatusRecord::new(0xC023_010F, 0x8034_010F, 0, "The TCP connection is not offloadable because of a local policy setting."), // STATUS_NDIS_OFFLOAD_POLICY
	StatusRecord::new(0xC023_0112, 0x8034_0112, 0, "The TCP connection is not offloadable by the Chimney offload target."), // STATUS_NDIS_OFFLOAD_CONNECTION_REJECTED
	StatusRecord::new(0xC023_0113, 0x8034_0113, 0, "The IP Path object is not in an offloadable state."), // STATUS_NDIS_OFFLOAD_PATH_REJECTED
	StatusRecord::new(0xC023_2000, 0x8034_2000, 0, "The wireless LAN interface is in auto-configuration mode and does not support the requested parameter change operation."), // STATUS_NDIS_DOT11_AUTO_CONFIG_ENABLED
	StatusRecord::new(0xC023_2001, 0x8034_2001, 0, "The wireless LAN interface is busy and cannot perform the requested operation."), // STATUS_NDIS_DOT11_MEDIA_IN_USE
	StatusRecord::new(0xC023_2002, 0x8034_2002, 0, "The wireless LAN interface is power down and does not support the requested operation."), // STATUS_NDIS_DOT11_POWER_STATE_INVALID
	StatusRecord::new(0xC023_2003, 0x8034_2003, 0, "The list of wake on LAN patterns is full."), // STATUS_NDIS_PM_WOL_PATTERN_LIST_FULL
	StatusRecord::new(0xC023_2004, 0x8034_2004, 0, "The list of low power protocol offloads is full."), // STATUS_NDIS_PM_PROTOCOL_OFFLOAD_LIST_FULL
	StatusRecord::new(0xC023_2005, 0x8034_2005, 0, "The wireless LAN interface cannot start an AP on the specified channel right now."), // STATUS_NDIS_DOT11_AP_CHANNEL_CURRENTLY_NOT_AVAILABLE
	StatusRecord::new(0xC023_2006, 0x8034_2006, 0, "The wireless LAN interface cannot start an AP on the specified band right now."), // STATUS_NDIS_DOT11_AP_BAND_CURRENTLY_NOT_AVAILABLE
	StatusRecord::new(0xC023_2007, 0x8034_2007, 0, "The wireless LAN interface cannot start an AP on this channel due to regulatory reasons."), // STATUS_NDIS_DOT11_AP_CHANNEL_NOT_ALLOWED
	StatusRecord::new(0xC023_2008, 0x8034_2008, 0, "The wireless LAN interface cannot start an AP on this band due to regulatory reasons."), // STATUS_NDIS_DOT11_AP_BAND_NOT_ALLOWED

	StatusRecord::new(0xC035_0001, 0xC035_0001, 0, "The hypervisor does not support the operation because the specified hypercall code is not supported."), // STATUS_HV_INVALID_HYPERCALL_CODE
	StatusRecord::new(0xC035_0002, 0xC035_0002, 0, "The hypervisor does not support the operation because the encoding for the hypercall input register is not supported."), // STATUS_HV_INVALID_HYPERCALL_INPUT
	StatusRecord::new(0xC035_0003, 0xC035_0003, 0, "The hypervisor could not perform the operation because a parameter has an invalid alignment."), // STATUS_HV_INVALID_ALIGNMENT
	StatusRecord::new(0xC035_0005, 0xC035_0005, 0, "The hypervisor could not perform the operation because an invalid parameter was specified."), // STATUS_HV_INVALID_PARAMETER
	StatusRecord::new(0xC035_0006, 0xC035_0006, 0, "Access to the specified object was denied."), // STATUS_HV_ACCESS_DENIED
	StatusRecord::new(0xC035_0007, 0xC035_0007, 0, "The hypervisor could not perform the operation because the partition is entering or in an invalid state."), // STATUS_HV_INVALID_PARTITION_STATE
	StatusRecord::new(0xC035_0008, 0xC035_0008, 0, "The operation is not allowed in the current state."), // STATUS_HV_OPERATION_DENIED
	StatusRecord::new(0xC035_0009, 0xC035_0009, 0, "The hypervisor does not recognize the specified partition property."), // STATUS_HV_UNKNOWN_PROPERTY
	StatusRecord::new(0xC035_000A, 0xC035_000A, 0, "The specified value of a partition property is out of range or violates an invariant."), // STATUS_HV_PROPERTY_VALUE_OUT_OF_RANGE
	StatusRecord::new(0xC035_000B, 0xC035_000B, 0, "There is not enough memory in the hypervisor pool to complete the operation."), // STATUS_HV_INSUFFICIENT_MEMORY
	StatusRecord::new(0xC035_000C, 0xC035_000C, 0, "The maximum partition depth has been exceeded for the partition hierarchy."), // STATUS_HV_PARTITION_TOO_DEEP
	StatusRecord::new(0xC035_000D, 0xC035_000D, 0, "A partition with the specified partition ID does not exist."), // STATUS_HV_INVALID_PARTITION_ID
	StatusRecord::new(0xC035_000E, 0xC035_000E, 0, "The hypervisor could not perform the operation because the specified VP index is invalid."), // STATUS_HV_INVALID_VP_INDEX
	StatusRecord::new(0xC035_0011, 0xC035_0011, 0, "The hypervisor could not perform the operation because the specified port identifier is invalid."), // STATUS_HV_INVALID_PORT_ID
	StatusRecord::new(0xC035_0012, 0xC035_0012, 0, "The hypervisor could not perform the operation because the specified connection identifier is invalid."), // STATUS_HV_INVALID_CONNECTION_ID
	StatusRecord::new(0xC035_0013, 0xC035_0013, 0, "No enough buffers were supplied to send a message."), // STATUS_HV_INSUFFICIENT_BUFFERS
	StatusRecord::new(0xC035_0014, 0xC035_0014, 0, "The previous virtual interrupt has not been acknowledged."), // STATUS_HV_NOT_ACKNOWLEDGED
	StatusRecord::new(0xC035_0015, 0xC035_0015, 0, "A virtual processor is not in the correct state for the indicated operation."), // STATUS_HV_INVALID_VP_STATE
	StatusRecord::new(0xC035_0016, 0xC035_0016, 0, "The previous virtual interrupt has already been acknowledged."), // STATUS_HV_ACKNOWLEDGED
	StatusRecord::new(0xC035_0017, 0xC035_0017, 0, "The indicated partition is not in a valid state for saving or restoring."), // STATUS_HV_INVALID_SAVE_RESTORE_STATE
	StatusRecord::new(0xC035_0018, 0xC035_0018, 0, "The hypervisor could not complete the operation because a required feature of the synthetic interrupt controller (SynIC) was disabled."), // STATUS_HV_INVALID_SYNIC_STATE
	StatusRecord::new(0xC035_0019, 0xC035_0019, 0, "The hypervisor could not perform the operation because the object or value was either already in use or being used for a purpose that would not permit completing the operation."), // STATUS_HV_OBJECT_IN_USE
	StatusRecord::new(0xC035_001A, 0xC035_001A, 0, "The proximity domain information is invalid."), // STATUS_HV_INVALID_PROXIMITY_DOMAIN_INFO
	StatusRecord::new(0xC035_001B, 0xC035_001B, 0, "An attempt to retrieve debugging data failed because none was available."), // STATUS_HV_NO_DATA
	StatusRecord::new(0xC035_001C, 0xC035_001C, 0, "The physical connection being used for debugging has not recorded any receive activity since the last operation."), // STATUS_HV_INACTIVE
	StatusRecord::new(0xC035_001D, 0xC035_001D, 0, "There are not enough resources to complete the operation."), // STATUS_HV_NO_RESOURCES
	StatusRecord::new(0xC035_001E, 0xC035_001E, 0, "A hypervisor feature is not available to the caller."), // STATUS_HV_FEATURE_UNAVAILABLE
	StatusRecord::new(0xC035_0033, 0xC035_0033, 0, "The specified buffer was too small for all requested data."), // STATUS_HV_INSUFFICIENT_BUFFER
	StatusRecord::new(0xC035_0038, 0xC035_0038, 0, "The maximum number of domains supported by the platform I/O remapping hardware is currently in use. No domains are available to assign this device to this partition."), // STATUS_HV_INSUFFICIENT_DEVICE_DOMAINS
	StatusRecord::new(0xC035_003C, 0xC035_003C, 0, "Validation of CPUID data of the processor failed."), // STATUS_HV_CPUID_FEATURE_VALIDATION_ERROR
	StatusRecord::new(0xC035_003D, 0xC035_003D, 0, "Validation of XSAVE CPUID data of the processor failed."), // STATUS_HV_CPUID_XSAVE_FEATURE_VALIDATION_ERROR
	StatusRecord::new(0xC035_003E, 0xC035_003E, 0, "Processor did not respond within the timeout period."), // STATUS_HV_PROCESSOR_STARTUP_TIMEOUT
	StatusRecord::new(0xC035_003F, 0xC035_003F, 0, "SMX has been enabled in the BIOS."), // STATUS_HV_SMX_ENABLED
	StatusRecord::new(0xC035_0041, 0xC035_0041, 0, "The hypervisor could not perform the operation because the specified LP index is invalid."), // STATUS_HV_INVALID_LP_INDEX
	StatusRecord::new(0xC035_0050, 0xC035_0050, 0, "The supplied register value is invalid."), // STATUS_HV_INVALID_REGISTER_VALUE
	StatusRecord::new(0xC035_0051, 0xC035_0051, 0, "The supplied virtual trust level is not in the correct state to perform the requested operation."), // STATUS_HV_INVALID_VTL_STATE
	StatusRecord::new(0xC035_0055, 0xC035_0055, 0, "No execute feature (NX) is not present or not enabled in the BIOS."), // STATUS_HV_NX_NOT_DETECTED
	StatusRecord::new(0xC035_0057, 0xC035_0057, 0, "The supplied device ID is invalid."), // STATUS_HV_INVALID_DEVICE_ID
	StatusRecord::new(0xC035_0058, 0xC035_0058, 0, "The operation is not allowed in the current device state."), // STATUS_HV_INVALID_DEVICE_STATE
	StatusRecord::new(0xC035_0060, 0xC035_0060, 0, "The device had pending page requests which were discarded."), // STATUS_HV_PAGE_REQUEST_INVALID
	StatusRecord::new(0xC035_006F, 0xC035_006F, 0, "The supplied CPU group ID is invalid."), // STATUS_HV_INVALID_CPU_GROUP_ID
	StatusRecord::new(0xC035_0070, 0xC035_0070, 0, "The operation is not allowed in the current CPU group state."), // STATUS_HV_INVALID_CPU_GROUP_STATE
	StatusRecord::new(0xC035_0071, 0xC035_0071, 0, "The requested operation failed."), // STATUS_HV_OPERATION_FAILED
	StatusRecord::new(0xC035_0072, 0xC035_0072, 0, "The requested operation is not allowed due to one or more virtual processors having nested virtualization active."), // STATUS_HV_NOT_ALLOWED_WITH_NESTED_VIRT_ACTIVE
	StatusRecord::new(0xC035_0073, 0xC035_0073, 0, "There is not enough memory in the root partition's pool to complete the operation."), // STATUS_HV_INSUFFICIENT_ROOT_MEMORY
	StatusRecord::new(0xC035_0074, 0xC035_0074, 0, "The provided event log buffer was already marked as freed."), // STATUS_HV_EVENT_BUFFER_ALREADY_FREED
	StatusRecord::new(0xC035_0075, 0xC035_0075, 0, "There is not enough contiguous memory in the partition's pool to complete the operation."), // STATUS_HV_INSUFFICIENT_CONTIGUOUS_MEMORY
	StatusRecord::new(0xC035_1000, 0xC035_1000, 0, "No hypervisor is present on this system."), // STATUS_HV_NOT_PRESENT

	StatusRecord::new(0xC036_8000, 13910, 0, "The SPI in the packet does not match a valid IPsec SA."), // STATUS_IPSEC_BAD_SPI
	StatusRecord::new(0xC036_8001, 13911, 0, "The packet was received on an IPsec SA whose lifetime has expired."), // STATUS_IPSEC_SA_LIFETIME_EXPIRED
	StatusRecord::new(0xC036_8002, 13912, 0, "The packet was received on an IPsec SA that does not match the packet characteristics."), // STATUS_IPSEC_WRONG_SA
	StatusRecord::new(0xC036_8003, 13913, 0, "The packet sequence number replay check failed."), // STATUS_IPSEC_REPLAY_CHECK_FAILED
	StatusRecord::new(0xC036_8004, 13914, 0, "The IPsec header and/or trailer in the packet is invalid."), // STATUS_IPSEC_INVALID_PACKET
	StatusRecord::new(0xC036_8005, 13915, 0, "The IPsec integrity check failed."), // STATUS_IPSEC_INTEGRITY_CHECK_FAILED
	StatusRecord::new(0xC036_8006, 13916, 0, "IPsec dropped a clear text packet."), // STATUS_IPSEC_CLEAR_TEXT_DROP
	StatusRecord::new(0xC036_8007, 13917, 0, "IPsec dropped an incoming ESP packet in authenticated firewall mode. This drop is benign."), // STATUS_IPSEC_AUTH_FIREWALL_DROP
	StatusRecord::new(0xC036_8008, 13918, 0, "IPsec dropped a packet due to DOS throttle."), // STATUS_IPSEC_THROTTLE_DROP
	StatusRecord::new(0xC036_B000, 13925, 0, "IPsec Dos Protection matched an explicit block rule."), // STATUS_IPSEC_DOSP_BLOCK
	StatusRecord::new(0xC036_B001, 13926, 0, "IPsec Dos Protection received an IPsec specific multicast packet which is not allowed."), // STATUS_IPSEC_DOSP_RECEIVED_MULTICAST
	StatusRecord::new(0xC036_B002, 13927, 0, "IPsec Dos Protection received an incorrectly formatted packet."), // STATUS_IPSEC_DOSP_INVALID_PACKET
	StatusRecord::new(0xC036_B003, 13928, 0, "IPsec Dos Protection failed to lookup state."), // STATUS_IPSEC_DOSP_STATE_LOOKUP_FAILED
	StatusRecord::new(0xC036_B004, 13929, 0, "IPsec Dos Protection failed to create state because there are already maximum number of entries allowed by policy."), // STATUS_IPSEC_DOSP_MAX_ENTRIES
	StatusRecord::new(0xC036_B005, 13930, 0, "IPsec Dos Protection received an IPsec negotiation packet for a keying module which is not allowed by policy."), // STATUS_IPSEC_DOSP_KEYMOD_NOT_ALLOWED
	StatusRecord::new(0xC036_B006, 13931, 0, "IPsec Dos Protection failed to create per internal IP ratelimit queue because there is already maximum number of queues allowed by policy."), // STATUS_IPSEC_DOSP_MAX_PER_IP_RATELIMIT_QUEUES

	StatusRecord::new(0xC037_0001, 0xC037_0001, 0, "A handler for the virtualization infrastructure driver is already registered. Restarting the virtual machine may fix the problem. If the problem persists, try restarting the physical computer."), // STATUS_VID_DUPLICATE_HANDLER
	StatusRecord::new(0xC037_0002, 0xC037_0002, 0, "The number of registered handlers for the virtualization infrastructure driver exceeded the maximum. Restarting the virtual machine may fix the problem. If the problem persists, try restarting the physical computer."), // STATUS_VID_TOO_MANY_HANDLERS
	StatusRecord::new(0xC037_0003, 0xC037_0003, 0, "The message queue for the virtualization infrastructure driver is full and cannot accept new messages. Restarting the virtual machine may fix the problem. If the problem persists, try restarting the physical computer."), // STATUS_VID_QUEUE_FULL
	StatusRecord::new(0xC037_0004, 0xC037_0004, 0, "No handler exists to handle the message for the virtualization infrastructure driver. Restarting the virtual machine may fix the problem. If the problem persists, try restarting the physical computer."), // STATUS_VID_HANDLER_NOT_PRESENT
	StatusRecord::new(0xC037_0005, 0xC037_0005, 0, "The name of the partition or message queue for the virtualization infrastructure driver is invalid. Restarting the virtual machine may fix the problem. If the problem persists, try restarting the physical computer."), // STATUS_VID_INVALID_OBJECT_NAME
	StatusRecord::new(0xC037_0006, 0xC037_0006, 0, "The partition name of the virtualization infrastructure driver exceeds the maximum."), // STATUS_VID_PARTITION_NAME_TOO_LONG
	StatusRecord::new(0xC037_0007, 0xC037_0007, 0, "The message queue name of the virtualization infrastructure driver exceeds the maximum."), // STATUS_VID_MESSAGE_QUEUE_NAME_TOO_LONG
	StatusRecord::new(0xC037_0008, 0xC037_0008, 0, "Cannot create the partition for the virtualization infrastructure driver because another partition with the same name already exists."), // STATUS_VID_PARTITION_ALREADY_EXISTS
	StatusRecord::new(0xC037_0009, 0xC037_0009, 0, "The virtualization infrastructure driver has encountered an error. The requested partition does not exist. Restarting the virtual machine may fix the problem. If the problem persists, try restarting the physical computer."), // STATUS_VID_PARTITION_DOES_NOT_EXIST
	StatusRecord::new(0xC037_000A, 0xC037_000A, 0, "The virtualization infrastructure driver has encountered an error. Could not find the requested partition. Restarting the virtual machine may fix the problem. If the problem persists, try restarting the physical computer."), // STATUS_VID_PARTITION_NAME_NOT_FOUND
	StatusRecord::new(0xC037_000B, 0xC037_000B, 0, "A message queue with the same name already exists for the virtualization infrastructure driver."), // STATUS_VID_MESSAGE_QUEUE_ALREADY_EXISTS
	StatusRecord::new(0xC037_000C, 0xC037_000C, 0, "The memory block page for the virtualization infrastructure driver cannot be mapped because the page map limit has been reached. Restarting the virtual machine may fix the problem. If the problem persists, try restarting the physical computer."), // STATUS_VID_EXCEEDED_MBP_ENTRY_MAP_LIMIT
	StatusRecord::new(0xC037_000D, 0xC037_000D, 0, "The memory block for the virtualization infrastructure driver is still being used and cannot be destroyed."), // STATUS_VID_MB_STILL_REFERENCED
	StatusRecord::new(0xC037_000E, 0xC037_000E, 0, "Cannot unlock the page array for the guest operating system memory address because it does not match a previous lock request. Restarting the virtual machine may fix the problem. If the problem persists, try restarting the physical computer."), // STATUS_VID_CHILD_GPA_PAGE_SET_CORRUPTED
	StatusRecord::new(0xC037_000F, 0xC037_000F, 0, "The non-uniform memory access (NUMA) node settings do not match the system NUMA topology. In order to start the virtual machine, you will need to modify the NUMA configuration."), // STATUS_VID_INVALID_NUMA_SETTINGS
	StatusRecord::new(0xC037_0010, 0xC037_0010, 0, "The non-uniform memory access (NUMA) node index does not match a valid index in the system NUMA topology."), // STATUS_VID_INVALID_NUMA_NODE_INDEX
	StatusRecord::new(0xC037_0011, 0xC037_0011, 0, "The memory block for the virtualization infrastructure driver is already associated with a message queue."), // STATUS_VID_NOTIFICATION_QUEUE_ALREADY_ASSOCIATED
	StatusRecord::new(0xC037_0012, 0xC037_0012, 0, "The handle is not a valid memory block handle for the virtualization infrastructure driver."), // STATUS_VID_INVALID_MEMORY_BLOCK_HANDLE
	StatusRecord::new(0xC037_0013, 0xC037_0013, 0, "The request exceeded the memory block page limit for the virtualization infrastructure driver. Restarting the virtual machine may fix the problem. If the problem persists, try restarting the physical computer."), // STATUS_VID_PAGE_RANGE_OVERFLOW
	StatusRecord::new(0xC037_0014, 0xC037_0014, 0, "The handle is not a valid message queue handle for the virtualization infrastructure driver."), // STATUS_VID_INVALID_MESSAGE_QUEUE_HANDLE
	StatusRecord::new(0xC037_0015, 0xC037_0015, 0, "The handle is not a valid page range handle for the virtualization infrastructure driver."), // STATUS_VID_INVALID_GPA_RANGE_HANDLE
	StatusRecord::new(0xC037_0016, 0xC037_0016, 0, "Cannot install client notifications because no message queue for the virtualization infrastructure driver is associated with the memory block."), // STATUS_VID_NO_MEMORY_BLOCK_NOTIFICATION_QUEUE
	StatusRecord::new(0xC037_0017, 0xC037_0017, 0, "The request to lock or map a memory block page failed because the virtualization infrastructure driver memory block limit has been reached. Restarting the virtual machine may fix the problem. If the problem persists, try restarting the physical computer."), // STATUS_VID_MEMORY_BLOCK_LOCK_COUNT_EXCEEDED
	StatusRecord::new(0xC037_0018, 0xC037_0018, 0, "The handle is not a valid parent partition mapping handle for the virtualization infrastructure driver."), // STATUS_VID_INVALID_PPM_HANDLE
	StatusRecord::new(0xC037_0019, 0xC037_0019, 0, "Notifications cannot be created on the memory block because it is use."), // STATUS_VID_MBPS_ARE_LOCKED
	StatusRecord::new(0xC037_001A, 0xC037_001A, 0, "The message queue for the virtualization infrastructure driver has been closed. Restarting the virtual machine may fix the problem. If the problem persists, try restarting the physical computer."), // STATUS_VID_MESSAGE_QUEUE_CLOSED
	StatusRecord::new(0xC037_001B, 0xC037_001B, 0, "Cannot add a virtual processor to the partition because the maximum has been reached."), // STATUS_VID_VIRTUAL_PROCESSOR_LIMIT_EXCEEDED
	StatusRecord::new(0xC037_001C, 0xC037_001C, 0, "Cannot stop the virtual processor immediately because of a pending intercept."), // STATUS_VID_STOP_PENDING
	StatusRecord::new(0xC037_001D, 0xC037_001D, 0, "Invalid state for the virtual processor. Restarting the virtual machine may fix the problem. If the problem persists, try restarting the physical computer."), // STATUS_VID_INVALID_PROCESSOR_STATE
	StatusRecord::new(0xC037_001E, 0xC037_001E, 0, "The maximum number of kernel mode clients for the virtualization infrastructure driver has been reached. Restarting this virtual machine may fix the problem. If the problem persists, try restarting the physical computer."), // STATUS_VID_EXCEEDED_KM_CONTEXT_COUNT_LIMIT
	StatusRecord::new(0xC037_001F, 0xC037_001F, 0, "This kernel mode interface for the virtualization infrastructure driver has already been initialized. Restarting the virtual machine may fix the problem. If the problem persists, try restarting the physical computer."), // STATUS_VID_KM_INTERFACE_ALREADY_INITIALIZED
	StatusRecord::new(0xC037_0020, 0xC037_0020, 0, "Cannot set or reset the memory block property more than once for the virtualization infrastructure driver. Restarting the virtual machine may fix the problem. If the problem persists, try restarting the physical computer."), // STATUS_VID_MB_PROPERTY_ALREADY_SET_RESET
	StatusRecord::new(0xC037_0021, 0xC037_0021, 0, "The memory mapped I/O for this page range no longer exists. Restarting the virtual machine may fix the problem. If the problem persists, try restarting the physical computer."), // STATUS_VID_MMIO_RANGE_DESTROYED
	StatusRecord::new(0xC037_0022, 0xC037_0022, 0, "The lock or unlock request uses an invalid guest operating system memory address. Restarting the virtual machine may fix the problem. If the problem persists, try restarting the physical computer."), // STATUS_VID_INVALID_CHILD_GPA_PAGE_SET
	StatusRecord::new(0xC037_0023, 0xC037_0023, 0, "Cannot destroy or reuse the reserve page set for the virtualization infrastructure driver because it is in use. Restarting the virtual machine may fix the problem. If the problem persists, try restarting the physical computer."), // STATUS_VID_RESERVE_PAGE_SET_IS_BEING_USED
	StatusRecord::new(0xC037_0024, 0xC037_0024, 0, "The reserve page set for the virtualization infrastructure driver is too small to use in the lock request. Restarting the virtual machine may fix the problem. If the problem persists, try restarting the physical computer."), // STATUS_VID_RESERVE_PAGE_SET_TOO_SMALL
	StatusRecord::new(0xC037_0025, 0xC037_0025, 0, "Cannot lock or map the memory block page for the virtualization infrastructure driver because it has already been locked using a reserve page set page. Restarting the virtual machine may fix the problem. If the problem persists, try restarting the physical computer."), // STATUS_VID_MBP_ALREADY_LOCKED_USING_RESERVED_PAGE
	StatusRecord::new(0xC037_0026, 0xC037_0026, 0, "Cannot create the memory block for the virtualization infrastructure driver because the requested number of pages exceeded the limit. Restarting the virtual machine may fix the problem. If the problem persists, try restarting the physical computer."), // STATUS_VID_MBP_COUNT_EXCEEDED_LIMIT
	StatusRecord::new(0xC037_0027, 0xC037_0027, 0, "Cannot restore this virtual machine because the saved state data cannot be read. Delete the saved state data and then try to start the virtual machine."), // STATUS_VID_SAVED_STATE_CORRUPT
	StatusRecord::new(0xC037_0028, 0xC037_0028, 0, "Cannot restore this virtual machine because an item read from the saved state data is not recognized. Delete the saved state data and then try to start the virtual machine."), // STATUS_VID_SAVED_STATE_UNRECOGNIZED_ITEM
	StatusRecord::new(0xC037_0029, 0xC037_0029, 0, "Cannot restore this virtual machine to the saved state because of hypervisor incompatibility. Delete the saved state data and then try to start the virtual machine."), // STATUS_VID_SAVED_STATE_INCOMPATIBLE
	StatusRecord::new(0xC037_002A, 0xC037_002A, 0, "The specified VTL does not have the permission to access the resource."), // STATUS_VID_VTL_ACCESS_DENIED

	StatusRecord::new(0xC03A_0001, 0xC03A_0001, 0, "The virtual hard disk is corrupted. The virtual hard disk drive footer is missing."), // STATUS_VHD_DRIVE_FOOTER_MISSING
	StatusRecord::new(0xC03A_0002, 0xC03A_0002, 0, "The virtual hard disk is corrupted. The virtual hard disk drive footer checksum does not match the on-disk checksum."), // STATUS_VHD_DRIVE_FOOTER_CHECKSUM_MISMATCH
	StatusRecord::new(0xC03A_0003, 0xC03A_0003, 0, "The virtual hard disk is corrupted. The virtual hard disk drive footer in the virtual hard disk is corrupted."), // STATUS_VHD_DRIVE_FOOTER_CORRUPT
	StatusRecord::new(0xC03A_0004, 0xC03A_0004, 0, "The system does not recognize the file format of this virtual hard disk."), // STATUS_VHD_FORMAT_UNKNOWN
	StatusRecord::new(0xC03A_0005, 0xC03A_0005, 0, "The version does not support this version of the file format."), // STATUS_VHD_FORMAT_UNSUPPORTED_VERSION
	StatusRecord::new(0xC03A_0006, 0xC03A_0006, 0, "The virtual hard disk is corrupted. The sparse header checksum does not match the on-disk checksum."), // STATUS_VHD_SPARSE_HEADER_CHECKSUM_MISMATCH
	StatusRecord::new(0xC03A_0007, 0xC03A_0007, 0, "The system does not support this version of the virtual hard disk. This version of the sparse header is not supported."), // STATUS_VHD_SPARSE_HEADER_UNSUPPORTED_VERSION
	StatusRecord::new(0xC03A_0008, 0xC03A_0008, 0, "The virtual hard disk is corrupted. The sparse header in the virtual hard disk is corrupt."), // STATUS_VHD_SPARSE_HEADER_CORRUPT
	StatusRecord::new(0xC03A_0009, 0xC03A_0009, 0, "Failed to write to the virtual hard disk failed because the system failed to allocate a new block in the virtual hard disk."), // STATUS_VHD_BLOCK_ALLOCATION_FAILURE
	StatusRecord::new(0xC03A_000A, 0xC03A_000A, 0, "The virtual hard disk is corrupted. The block allocation table in the virtual hard disk is corrupt."), // STATUS_VHD_BLOCK_ALLOCATION_TABLE_CORRUPT
	StatusRecord::new(0xC03A_000B, 0xC03A_000B, 0, "The system does not support this version of the virtual hard disk. The block size is invalid."), // STATUS_VHD_INVALID_BLOCK_SIZE
	StatusRecord::new(0xC03A_000C, 0xC03A_000C, 0, "The virtual hard disk is corrupted. The block bitmap does not match with the block data present in the virtual hard disk."), // STATUS_VHD_BITMAP_MISMATCH
	StatusRecord::new(0xC03A_000D, 0xC03A_000D, 0, "The chain of virtual hard disks is broken. The system cannot locate the parent virtual hard disk for the differencing disk."), // STATUS_VHD_PARENT_VHD_NOT_FOUND
	StatusRecord::new(0xC03A_000E, 0xC03A_000E, 0, "The chain of virtual hard disks is corrupted. There is a mismatch in the identifiers of the parent virtual hard disk and differencing disk."), // STATUS_VHD_CHILD_PARENT_ID_MISMATCH
	StatusRecord::new(0xC03A_000F, 0xC03A_000F, 0, "The chain of virtual hard disks is corrupted. The time stamp of the parent virtual hard disk does not match the time stamp of the differencing disk."), // STATUS_VHD_CHILD_PARENT_TIMESTAMP_MISMATCH
	StatusRecord::new(0xC03A_0010, 0xC03A_0010, 0, "Failed to read the metadata of the virtual hard disk."), // STATUS_VHD_METADATA_READ_FAILURE
	StatusRecord::new(0xC03A_0011, 0xC03A_0011, 0, "Failed to write to the metadata of the virtual hard disk."), // STATUS_VHD_METADATA_WRITE_FAILURE
	StatusRecord::new(0xC03A_0012, 0xC03A_0012, 0, "The size of the virtual hard disk is not valid."), // STATUS_VHD_INVALID_SIZE
	StatusRecord::new(0xC03A_0013, 0xC03A_0013, 0, "The file size of this virtual hard disk is not valid."), // STATUS_VHD_INVALID_FILE_SIZE
	StatusRecord::new(0xC03A_0014, 0xC03A_0014, 0, "A virtual disk support provider for the specified file was not found."), // STATUS_VIRTDISK_PROVIDER_NOT_FOUND
	StatusRecord::new(0xC03A_0015, 0xC03A_0015, 0, "The specified disk is not a virtual disk."), // STATUS_VIRTDISK_NOT_VIRTUAL_DISK
	StatusRecord::new(0xC03A_0016, 0xC03A_0016, 0, "The chain of virtual hard disks is inaccessible. The process has not been granted access rights to the parent virtual hard disk for the differencing disk."), // STATUS_VHD_PARENT_VHD_ACCESS_DENIED
	StatusRecord::new(0xC03A_0017, 0xC03A_0017, 0, "The chain of virtual hard disks is corrupted. There is a mismatch in the virtual sizes of the parent virtual hard disk and differencing disk."), // STATUS_VHD_CHILD_PARENT_SIZE_MISMATCH
	StatusRecord::new(0xC03A_0018, 0xC03A_0018, 0, "The chain of virtual hard disks is corrupted. A differencing disk is indicated in its own parent chain."), // STATUS_VHD_DIFFERENCING_CHAIN_CYCLE_DETECTED
	StatusRecord::new(0xC03A_0019, 0xC03A_0019, 0, "The chain of virtual hard disks is inaccessible. There was an error opening a virtual hard disk further up the chain."), // STATUS_VHD_DIFFERENCING_CHAIN_ERROR_IN_PARENT
	StatusRecord::new(0xC03A_001A, 0xC03A_001A, 0, "The requested operation could not be completed due to a virtual disk system limitation. Virtual hard disk files must be uncompressed and unencrypted and must not be sparse."), // STATUS_VIRTUAL_DISK_LIMITATION
	StatusRecord::new(0xC03A_001B, 0xC03A_001B, 0, "The requested operation cannot be performed on a virtual disk of this type."), // STATUS_VHD_INVALID_TYPE
	StatusRecord::new(0xC03A_001C, 0xC03A_001C, 0, "The requested operation cannot be performed on the virtual disk in its current state."), // STATUS_VHD_INVALID_STATE
	StatusRecord::new(0xC03A_001D, 0xC03A_001D, 0, "The sector size of the physical disk on which the virtual disk resides is not supported."), // STATUS_VIRTDISK_UNSUPPORTED_DISK_SECTOR_SIZE
	StatusRecord::new(0xC03A_001E, 0xC03A_001E, 0, "The disk is already owned by a different owner."), // STATUS_VIRTDISK_DISK_ALREADY_OWNED
	StatusRecord::new(0xC03A_001F, 0xC03A_001F, 0, "The disk must be offline or read-only."), // STATUS_VIRTDISK_DISK_ONLINE_AND_WRITABLE
	StatusRecord::new(0xC03A_0020, 0xC03A_0020, 0, "Change Tracking is not initialized for this virtual disk."), // STATUS_CTLOG_TRACKING_NOT_INITIALIZED
	StatusRecord::new(0xC03A_0021, 0xC03A_0021, 0, "Size of change tracking file exceeded the maximum size limit."), // STATUS_CTLOG_LOGFILE_SIZE_EXCEEDED_MAXSIZE
	StatusRecord::new(0xC03A_0022, 0xC03A_0022, 0, "VHD file is changed due to compaction, expansion, or offline patching."), // STATUS_CTLOG_VHD_CHANGED_OFFLINE
	StatusRecord::new(0xC03A_0023, 0xC03A_0023, 0, "Change Tracking for the virtual disk is not in a valid state to perform this request. Change tracking could be discontinued or already in the requested state."), // STATUS_CTLOG_INVALID_TRACKING_STATE
	StatusRecord::new(0xC03A_0024, 0xC03A_0024, 0, "Change Tracking file for the virtual disk is not in a valid state."), // STATUS_CTLOG_INCONSISTENT_TRACKING_FILE
	StatusRecord::new(0xC03A_0028, 0xC03A_0028, 0, "There is not enough space in the virtual disk file for the provided metadata item."), // STATUS_VHD_METADATA_FULL
	StatusRecord::new(0xC03A_0029, 0xC03A_0029, 0, "The specified change tracking identifier is not valid."), // STATUS_VHD_INVALID_CHANGE_TRACKING_ID
	StatusRecord::new(0xC03A_002A, 0xC03A_002A, 0, "Change tracking is disabled for the specified virtual hard disk, so no change tracking information is available."), // STATUS_VHD_CHANGE_TRACKING_DISABLED
	StatusRecord::new(0xC03A_0030, 0xC03A_0030, 0, "There is no change tracking data available associated with the specified change tracking identifier."), // STATUS_VHD_MISSING_CHANGE_TRACKING_INFORMATION
	StatusRecord::new(0xC03A_0031, 0xC03A_0031, 0, "The requested resize operation would truncate data on the virtual disk."), // STATUS_VHD_RESIZE_WOULD_TRUNCATE_DATA
	StatusRecord::new(0xC03A_0032, 0xC03A_0032, 0, "The minimum virtual size of the virtual disk could not be computed."), // STATUS_VHD_COULD_NOT_COMPUTE_MINIMUM_VIRTUAL_SIZE
	StatusRecord::new(0xC03A_0033, 0xC03A_0033, 0, "The virtual disk is already at or below its minimum virtual size."), // STATUS_VHD_ALREADY_AT_OR_BELOW_MINIMUM_VIRTUAL_SIZE
];
